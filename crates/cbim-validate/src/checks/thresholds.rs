use serde_json::Value;

use cbim_bundle::Document;
use cbim_model::{Analyte, Diagnostics, ModuleName, ReferenceValues, nearly_equal};

/// The decision threshold for each analyte must be stated identically,
/// within tolerance, in the framework module's biomarker variable list
/// and in the provenance module's threshold-provenance block.
///
/// The two analytes and two modules are checked independently, so a
/// single run can surface up to four separate errors.
pub fn check_threshold_consistency(
    framework: &Document,
    provenance: &Document,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for analyte in Analyte::ALL {
        let expected = reference.ct_threshold(analyte);
        match framework_threshold(framework, analyte) {
            None => diagnostics.error(format!(
                "{} missing biomarker variable '{}' ct_threshold",
                ModuleName::CbimFramework.file_name(),
                analyte.variable_id()
            )),
            Some(actual) => check_threshold(
                actual,
                expected,
                &format!(
                    "{analyte} threshold mismatch in {}",
                    ModuleName::CbimFramework.file_name()
                ),
                diagnostics,
            ),
        }
    }

    for analyte in Analyte::ALL {
        let expected = reference.ct_threshold(analyte);
        let field = analyte.provenance_field();
        match provenance.value_at(&["threshold_provenance", field, "value"]) {
            None => diagnostics.error(format!(
                "{} missing threshold_provenance.{field}.value",
                ModuleName::Provenance.file_name()
            )),
            Some(actual) => check_threshold(
                actual,
                expected,
                &format!(
                    "{analyte} threshold mismatch in {}",
                    ModuleName::Provenance.file_name()
                ),
                diagnostics,
            ),
        }
    }
}

/// The temporal module may restate the decision thresholds under its own
/// kinetics block; when present they must match the same constants.
pub fn check_temporal_thresholds(
    temporal: &Document,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for analyte in Analyte::ALL {
        let expected = reference.ct_threshold(analyte);
        let key = analyte.kinetics_key();
        match temporal.value_at(&["biomarker_kinetics", key, "ct_decision_threshold", "value"]) {
            None => diagnostics.error(format!(
                "{} missing biomarker_kinetics.{key}.ct_decision_threshold.value",
                ModuleName::TemporalPhases.file_name()
            )),
            Some(actual) => check_threshold(
                actual,
                expected,
                &format!("Temporal {analyte} threshold mismatch"),
                diagnostics,
            ),
        }
    }
}

/// First biomarker variable with a matching id wins.
fn framework_threshold<'a>(framework: &'a Document, analyte: Analyte) -> Option<&'a Value> {
    let variables = framework.sequence_at(&["channels", "biomarker", "variables"])?;
    let entry = variables
        .iter()
        .find(|item| item.get("id").and_then(Value::as_str) == Some(analyte.variable_id()))?;
    entry.get("ct_threshold").filter(|value| !value.is_null())
}

fn check_threshold(actual: &Value, expected: f64, context: &str, diagnostics: &mut Diagnostics) {
    let matches = actual
        .as_f64()
        .is_some_and(|value| nearly_equal(value, expected));
    if !matches {
        diagnostics.error(format!("{context}: {actual} != {expected:?}"));
    }
}
