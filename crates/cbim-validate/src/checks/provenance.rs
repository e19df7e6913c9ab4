use std::collections::BTreeSet;

use serde_json::Value;

use cbim_bundle::Document;
use cbim_model::{Analyte, Diagnostics, ModuleName, ReferenceValues};

/// Each threshold-provenance block must declare the contexts it applies
/// to, and that set must cover the required contexts.
pub fn check_provenance_applicability(
    provenance: &Document,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for analyte in Analyte::ALL {
        let field = analyte.provenance_field();
        let Some(applies_to) =
            provenance.sequence_at(&["threshold_provenance", field, "applies_to"])
        else {
            diagnostics.error(format!(
                "{} missing threshold_provenance.{field}.applies_to",
                ModuleName::Provenance.file_name()
            ));
            continue;
        };

        let declared: BTreeSet<&str> = applies_to.iter().filter_map(Value::as_str).collect();
        let mut missing: Vec<&str> = reference
            .required_threshold_contexts
            .iter()
            .copied()
            .filter(|context| !declared.contains(context))
            .collect();
        missing.sort_unstable();
        if !missing.is_empty() {
            diagnostics.error(format!(
                "{} {field}.applies_to missing required contexts: {missing:?}",
                ModuleName::Provenance.file_name()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use cbim_model::{Diagnostics, ReferenceValues};

    use super::check_provenance_applicability;
    use crate::checks::testutil::doc;

    #[test]
    fn covering_contexts_produce_no_errors() {
        let provenance = doc(
            "threshold_provenance:\n  gfap_ct_threshold:\n    applies_to: [adult, mild_tbi]\n  uchl1_ct_threshold:\n    applies_to: [adult, mild_tbi, moderate_tbi]\n",
        );
        let mut diagnostics = Diagnostics::new();
        check_provenance_applicability(&provenance, &ReferenceValues::default(), &mut diagnostics);
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn missing_applies_to_field_is_reported() {
        let provenance = doc(
            "threshold_provenance:\n  gfap_ct_threshold:\n    applies_to: [adult, mild_tbi]\n  uchl1_ct_threshold:\n    value: 360.0\n",
        );
        let mut diagnostics = Diagnostics::new();
        check_provenance_applicability(&provenance, &ReferenceValues::default(), &mut diagnostics);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(
            diagnostics.errors().next().expect("error").message,
            "provenance.yaml missing threshold_provenance.uchl1_ct_threshold.applies_to"
        );
    }

    #[test]
    fn absent_contexts_are_listed_sorted() {
        let provenance = doc(
            "threshold_provenance:\n  gfap_ct_threshold:\n    applies_to: [pediatric]\n  uchl1_ct_threshold:\n    applies_to: [mild_tbi]\n",
        );
        let mut diagnostics = Diagnostics::new();
        check_provenance_applicability(&provenance, &ReferenceValues::default(), &mut diagnostics);
        let messages: Vec<&str> = diagnostics
            .errors()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(
            messages,
            [
                "provenance.yaml gfap_ct_threshold.applies_to missing required contexts: [\"adult\", \"mild_tbi\"]",
                "provenance.yaml uchl1_ct_threshold.applies_to missing required contexts: [\"adult\"]",
            ]
        );
    }

    #[test]
    fn non_sequence_applies_to_counts_as_missing() {
        let provenance = doc(
            "threshold_provenance:\n  gfap_ct_threshold:\n    applies_to: adult\n  uchl1_ct_threshold:\n    applies_to: [adult, mild_tbi]\n",
        );
        let mut diagnostics = Diagnostics::new();
        check_provenance_applicability(&provenance, &ReferenceValues::default(), &mut diagnostics);
        assert_eq!(diagnostics.error_count(), 1);
        assert!(
            diagnostics
                .errors()
                .next()
                .expect("error")
                .message
                .contains("missing threshold_provenance.gfap_ct_threshold.applies_to")
        );
    }
}
