use serde_json::Value;

use cbim_bundle::Document;
use cbim_model::{Diagnostics, ModuleName, ReferenceValues};

/// The imaging element lists have fixed sizes, and the supplementary
/// list must carry the current terminology: the replacement id present,
/// the retired one gone. Count and identifier checks are independent and
/// can fire together.
pub fn check_element_invariants(
    imaging: &Document,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    let core = imaging.sequence_at(&["core_cdes"]).unwrap_or_default();
    let supplementary = imaging
        .sequence_at(&["supplementary_cdes"])
        .unwrap_or_default();

    if core.len() != reference.core_cde_count {
        diagnostics.error(format!(
            "Expected {} core CDEs, found {}",
            reference.core_cde_count,
            core.len()
        ));
    }
    if supplementary.len() != reference.supplementary_cde_count {
        diagnostics.error(format!(
            "Expected {} supplementary CDEs, found {}",
            reference.supplementary_cde_count,
            supplementary.len()
        ));
    }

    let ids: Vec<&str> = supplementary
        .iter()
        .filter_map(|cde| cde.get("id").and_then(Value::as_str))
        .collect();
    if !ids.contains(&reference.required_supplementary_id) {
        diagnostics.error(format!(
            "{} missing supplementary CDE id '{}'",
            ModuleName::ImagingCdes.file_name(),
            reference.required_supplementary_id
        ));
    }
    if ids.contains(&reference.deprecated_supplementary_id) {
        diagnostics.error(format!(
            "{} still contains deprecated id '{}'",
            ModuleName::ImagingCdes.file_name(),
            reference.deprecated_supplementary_id
        ));
    }
}

#[cfg(test)]
mod tests {
    use cbim_model::{Diagnostics, ReferenceValues};

    use super::check_element_invariants;
    use crate::checks::testutil::doc;

    fn imaging_yaml(core: usize, supplementary_ids: &[&str]) -> String {
        let mut out = String::from("core_cdes:\n");
        for index in 0..core {
            out.push_str(&format!("  - id: core_{index}\n"));
        }
        out.push_str("supplementary_cdes:\n");
        for id in supplementary_ids {
            out.push_str(&format!("  - id: {id}\n"));
        }
        out
    }

    fn supplementary_ids(count: usize) -> Vec<String> {
        let mut ids = vec!["tapvi".to_string()];
        ids.extend((1..count).map(|index| format!("supp_{index}")));
        ids
    }

    #[test]
    fn expected_counts_and_ids_pass() {
        let ids = supplementary_ids(18);
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut diagnostics = Diagnostics::new();
        check_element_invariants(
            &doc(&imaging_yaml(9, &refs)),
            &ReferenceValues::default(),
            &mut diagnostics,
        );
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn short_supplementary_list_reports_only_the_count() {
        let ids = supplementary_ids(17);
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut diagnostics = Diagnostics::new();
        check_element_invariants(
            &doc(&imaging_yaml(9, &refs)),
            &ReferenceValues::default(),
            &mut diagnostics,
        );
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(
            diagnostics.errors().next().expect("error").message,
            "Expected 18 supplementary CDEs, found 17"
        );
    }

    #[test]
    fn core_count_deviation_is_reported() {
        let ids = supplementary_ids(18);
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut diagnostics = Diagnostics::new();
        check_element_invariants(
            &doc(&imaging_yaml(10, &refs)),
            &ReferenceValues::default(),
            &mut diagnostics,
        );
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(
            diagnostics.errors().next().expect("error").message,
            "Expected 9 core CDEs, found 10"
        );
    }

    #[test]
    fn missing_tapvi_and_present_tamvi_fire_independently() {
        let mut ids = supplementary_ids(18);
        ids[0] = "tamvi".to_string(); // replace tapvi with the retired id
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut diagnostics = Diagnostics::new();
        check_element_invariants(
            &doc(&imaging_yaml(9, &refs)),
            &ReferenceValues::default(),
            &mut diagnostics,
        );
        let messages: Vec<&str> = diagnostics
            .errors()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(
            messages,
            [
                "imaging_cdes.yaml missing supplementary CDE id 'tapvi'",
                "imaging_cdes.yaml still contains deprecated id 'tamvi'",
            ]
        );
    }

    #[test]
    fn absent_lists_report_both_counts_and_the_required_id() {
        let mut diagnostics = Diagnostics::new();
        check_element_invariants(
            &doc("schema_contract: {}\n"),
            &ReferenceValues::default(),
            &mut diagnostics,
        );
        let messages: Vec<&str> = diagnostics
            .errors()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(
            messages,
            [
                "Expected 9 core CDEs, found 0",
                "Expected 18 supplementary CDEs, found 0",
                "imaging_cdes.yaml missing supplementary CDE id 'tapvi'",
            ]
        );
    }
}
