//! The cross-module consistency rule set.
//!
//! Each rule is a pure function over already-loaded module trees and the
//! injected reference values. Rules share no state beyond the append-only
//! diagnostics list, never stop each other, and can run in any order; the
//! orchestrator runs all of them once the consistency stage is reached.
//!
//! Numeric threshold comparisons coerce to `f64` and use the absolute
//! tolerance from `cbim_model`; kinetics, identifier and list comparisons
//! are exact and order-sensitive where the rule says so.

mod elements;
mod kinetics;
mod mapping;
mod phases;
mod provenance;
mod thresholds;

pub use elements::check_element_invariants;
pub use kinetics::{ClearanceShape, check_temporal_kinetics};
pub use mapping::check_mapping_hooks;
pub use phases::{check_phase_alignment, check_phase_id_declarations};
pub use provenance::check_provenance_applicability;
pub use thresholds::{check_temporal_thresholds, check_threshold_consistency};

#[cfg(test)]
pub(crate) mod testutil {
    use cbim_bundle::Document;

    pub(crate) fn doc(text: &str) -> Document {
        Document::from_yaml_str(text).expect("valid test document")
    }
}
