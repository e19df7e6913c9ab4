use std::collections::BTreeSet;

use serde_json::Value;

use cbim_bundle::Document;
use cbim_model::{Diagnostics, ModuleName};

const CANONICAL_PATH: [&str; 2] = ["schema_contract", "canonical_phase_ids"];

/// Every phase id declared canonical in the temporal module's schema
/// contract must have a matching per-phase detail block.
///
/// The check is one-directional: detail blocks whose ids are not listed
/// canonically are left alone.
pub fn check_phase_id_declarations(temporal: &Document, diagnostics: &mut Diagnostics) {
    let canonical: BTreeSet<&str> = temporal.str_list_at(&CANONICAL_PATH).into_iter().collect();
    let declared: BTreeSet<&str> = temporal
        .mapping_at(&["phases"])
        .map(|phases| {
            phases
                .values()
                .filter_map(|payload| payload.get("id").and_then(Value::as_str))
                .filter(|id| !id.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let missing: Vec<&str> = canonical.difference(&declared).copied().collect();
    if !missing.is_empty() {
        diagnostics.error(format!(
            "{} missing phase IDs declared in schema_contract: {missing:?}",
            ModuleName::TemporalPhases.file_name()
        ));
    }
}

/// The temporal and imaging modules must declare the same canonical phase
/// id list, order included, and every phase referenced by an imaging data
/// element must belong to the temporal module's canonical set.
pub fn check_phase_alignment(
    temporal: &Document,
    imaging: &Document,
    diagnostics: &mut Diagnostics,
) {
    let temporal_ids = temporal.sequence_at(&CANONICAL_PATH).unwrap_or_default();
    let imaging_ids = imaging.sequence_at(&CANONICAL_PATH).unwrap_or_default();
    if temporal_ids != imaging_ids {
        diagnostics.error(format!(
            "Canonical phase ID mismatch between {} and {}",
            ModuleName::TemporalPhases.file_name(),
            ModuleName::ImagingCdes.file_name()
        ));
    }

    let valid: BTreeSet<&str> = temporal_ids.iter().filter_map(Value::as_str).collect();
    let mut unknown: BTreeSet<&str> = BTreeSet::new();
    for section in ["core_cdes", "supplementary_cdes"] {
        for cde in imaging.sequence_at(&[section]).unwrap_or_default() {
            let referenced = cde
                .get("temporal_phases")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for phase in referenced.iter().filter_map(Value::as_str) {
                if !valid.contains(phase) {
                    unknown.insert(phase);
                }
            }
        }
    }
    if !unknown.is_empty() {
        let unknown: Vec<&str> = unknown.into_iter().collect();
        diagnostics.error(format!(
            "{} references unknown temporal phase IDs: {unknown:?}",
            ModuleName::ImagingCdes.file_name()
        ));
    }
}
