use std::fmt;

use serde_json::{Map, Value};

use cbim_bundle::Document;
use cbim_model::{Analyte, Diagnostics, ModuleName, ReferenceValues};

/// Which of the two backward-compatible document shapes the subacute
/// phase block uses for clearance kinetics.
///
/// Resolved once per document. The shapes are mutually exclusive: a
/// present, non-empty legacy container always wins and the current-shape
/// checks are skipped entirely.
#[derive(Debug)]
pub enum ClearanceShape<'a> {
    /// Historical shape: a flat `key_biomarker_windows` mapping holding
    /// per-analyte half-life scalar and range keys.
    Legacy(&'a Map<String, Value>),
    /// Current shape: `biomarker_clearance_kinetics` keyed by analyte,
    /// range-only. `None` when the container itself is absent.
    Current(Option<&'a Map<String, Value>>),
}

impl<'a> ClearanceShape<'a> {
    pub fn resolve(temporal: &'a Document) -> Self {
        match temporal.mapping_at(&["phases", "subacute", "key_biomarker_windows"]) {
            Some(windows) if !windows.is_empty() => ClearanceShape::Legacy(windows),
            _ => ClearanceShape::Current(
                temporal.mapping_at(&["phases", "subacute", "biomarker_clearance_kinetics"]),
            ),
        }
    }
}

/// Clearance half-lives in the subacute block must match the published
/// kinetics exactly; no tolerance is applied here.
pub fn check_temporal_kinetics(
    temporal: &Document,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    match ClearanceShape::resolve(temporal) {
        ClearanceShape::Legacy(windows) => check_legacy_windows(windows, reference, diagnostics),
        ClearanceShape::Current(clearance) => {
            check_clearance_kinetics(clearance, reference, diagnostics);
        }
    }
}

enum Expectation {
    Scalar(f64),
    Range([f64; 2]),
}

impl Expectation {
    fn matches(&self, actual: &Value) -> bool {
        match self {
            Expectation::Scalar(expected) => actual.as_f64() == Some(*expected),
            Expectation::Range(expected) => range_matches(actual, expected),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Scalar(value) => write!(f, "{value:?}"),
            Expectation::Range(range) => write!(f, "{range:?}"),
        }
    }
}

fn check_legacy_windows(
    windows: &Map<String, Value>,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for analyte in Analyte::ALL {
        let clearance = reference.clearance(analyte);
        let scalar_key = format!("{}_clearance_half_life_hours", analyte.kinetics_key());
        let range_key = format!("{}_clearance_half_life_range_hours", analyte.kinetics_key());
        check_legacy_key(
            windows,
            &scalar_key,
            &Expectation::Scalar(clearance.half_life_hours),
            diagnostics,
        );
        check_legacy_key(
            windows,
            &range_key,
            &Expectation::Range(clearance.half_life_range_hours),
            diagnostics,
        );
    }
}

fn check_legacy_key(
    windows: &Map<String, Value>,
    key: &str,
    expected: &Expectation,
    diagnostics: &mut Diagnostics,
) {
    match windows.get(key).filter(|value| !value.is_null()) {
        None => diagnostics.error(format!(
            "{} missing subacute.key_biomarker_windows.{key}",
            ModuleName::TemporalPhases.file_name()
        )),
        Some(actual) if !expected.matches(actual) => diagnostics.error(format!(
            "Temporal kinetics mismatch for {key}: {actual} != {expected}"
        )),
        Some(_) => {}
    }
}

fn check_clearance_kinetics(
    clearance: Option<&Map<String, Value>>,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for analyte in Analyte::ALL {
        let expected = reference.clearance(analyte).half_life_range_hours;
        let key = analyte.kinetics_key();
        let actual = clearance
            .and_then(|mapping| mapping.get(key))
            .and_then(|entry| entry.get("half_life_hours"))
            .filter(|value| !value.is_null());
        match actual {
            None => diagnostics.error(format!(
                "{} missing subacute.biomarker_clearance_kinetics.{key}.half_life_hours",
                ModuleName::TemporalPhases.file_name()
            )),
            Some(actual) if !range_matches(actual, &expected) => diagnostics.error(format!(
                "Temporal kinetics mismatch for {key} half-life range: {actual} != {expected:?}"
            )),
            Some(_) => {}
        }
    }
}

/// Exact, order-sensitive list equality after numeric coercion of the
/// elements.
fn range_matches(actual: &Value, expected: &[f64; 2]) -> bool {
    let Some(items) = actual.as_array() else {
        return false;
    };
    items.len() == expected.len()
        && items
            .iter()
            .zip(expected)
            .all(|(item, bound)| item.as_f64() == Some(*bound))
}
