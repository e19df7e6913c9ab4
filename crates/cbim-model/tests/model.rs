use std::str::FromStr;

use proptest::prelude::proptest;

use cbim_model::{Analyte, Diagnostics, ModuleName, ReferenceValues, TOLERANCE, nearly_equal};

#[test]
fn module_keys_match_file_names() {
    for module in ModuleName::ALL {
        assert_eq!(module.file_name(), format!("{}.yaml", module.key()));
    }
}

#[test]
fn module_key_round_trips_through_from_str() {
    for module in ModuleName::ALL {
        assert_eq!(ModuleName::from_str(module.key()).expect("parse"), module);
    }
    assert!(ModuleName::from_str("cbim_framework.yaml").is_err());
}

#[test]
fn analyte_identifiers() {
    assert_eq!(Analyte::Gfap.variable_id(), "gfap_pg_ml");
    assert_eq!(Analyte::Uchl1.variable_id(), "uchl1_pg_ml");
    assert_eq!(Analyte::Gfap.provenance_field(), "gfap_ct_threshold");
    assert_eq!(Analyte::Uchl1.provenance_field(), "uchl1_ct_threshold");
    assert_eq!(Analyte::Gfap.to_string(), "GFAP");
    assert_eq!(Analyte::Uchl1.to_string(), "UCH-L1");
}

#[test]
fn nearly_equal_accepts_differences_within_tolerance() {
    assert!(nearly_equal(30.0, 30.0));
    assert!(nearly_equal(30.0, 30.0 + TOLERANCE * 0.4));
    assert!(!nearly_equal(30.0, 30.0 + TOLERANCE * 10.0));
    assert!(!nearly_equal(29.5, 30.0));
}

#[test]
fn nearly_equal_uses_absolute_tolerance_only() {
    // A relative tolerance would accept this; the absolute bound must not.
    assert!(!nearly_equal(1.0e12, 1.0e12 + 1.0));
}

proptest! {
    #[test]
    fn nearly_equal_is_symmetric(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
        assert_eq!(nearly_equal(a, b), nearly_equal(b, a));
        assert_eq!(nearly_equal(a, b), (a - b).abs() <= TOLERANCE);
    }
}

#[test]
fn reference_defaults_carry_published_constants() {
    let reference = ReferenceValues::default();
    assert_eq!(reference.ct_threshold(Analyte::Gfap), 30.0);
    assert_eq!(reference.ct_threshold(Analyte::Uchl1), 360.0);
    assert_eq!(reference.clearance(Analyte::Gfap).half_life_hours, 24.0);
    assert_eq!(
        reference.clearance(Analyte::Gfap).half_life_range_hours,
        [24.0, 36.0]
    );
    assert_eq!(reference.clearance(Analyte::Uchl1).half_life_hours, 8.0);
    assert_eq!(
        reference.clearance(Analyte::Uchl1).half_life_range_hours,
        [7.0, 9.0]
    );
    assert_eq!(reference.required_threshold_contexts, ["adult", "mild_tbi"]);
    assert_eq!(reference.core_cde_count, 9);
    assert_eq!(reference.supplementary_cde_count, 18);
    assert_eq!(reference.required_supplementary_id, "tapvi");
    assert_eq!(reference.deprecated_supplementary_id, "tamvi");
    assert_eq!(reference.mapping_hook_modules.len(), 5);
    assert!(
        !reference
            .mapping_hook_modules
            .contains(&ModuleName::TemporalPhases)
    );
}

#[test]
fn diagnostics_tracks_counts_and_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    diagnostics.warn("first warning");
    diagnostics.error("first error");
    diagnostics.warn("second warning");
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 2);
    assert!(diagnostics.has_errors());

    let messages: Vec<&str> = diagnostics
        .iter()
        .map(|entry| entry.message.as_str())
        .collect();
    assert_eq!(messages, ["first warning", "first error", "second warning"]);
}

#[test]
fn diagnostics_without_errors_passes() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.warn("advisory only");
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.errors().count(), 0);
}
