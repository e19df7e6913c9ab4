//! Run orchestration.
//!
//! The run is a fixed state machine: `Load -> Schema -> Consistency`.
//! Load failures and a missing (or unreadable) shared schema file are the
//! only conditions that stop further checking; every other finding is
//! collected so a single run yields as many diagnostics as possible.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use cbim_bundle::{Document, load_bundle};
use cbim_model::{Diagnostics, ModuleName, ReferenceValues};

use crate::checks;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding the seven module files and `schema.json`.
    pub ontology_dir: PathBuf,
    /// Skip the schema stage entirely (no warning is emitted).
    pub skip_schema: bool,
}

impl RunOptions {
    pub fn new(ontology_dir: impl Into<PathBuf>) -> Self {
        Self {
            ontology_dir: ontology_dir.into(),
            skip_schema: false,
        }
    }
}

/// Stages of a validation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Schema,
    Consistency,
}

#[derive(Debug)]
pub struct RunReport {
    pub diagnostics: Diagnostics,
    /// The stage the run stopped at, when it could not reach the end.
    pub halted: Option<Stage>,
}

impl RunReport {
    /// Success means zero errors; warnings never fail a run.
    pub fn passed(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Validate the bundle at `options.ontology_dir` against the published
/// reference values.
pub fn run(options: &RunOptions) -> RunReport {
    run_with_reference(options, &ReferenceValues::default())
}

pub fn run_with_reference(options: &RunOptions, reference: &ReferenceValues) -> RunReport {
    let mut diagnostics = Diagnostics::new();

    let bundle = load_bundle(&options.ontology_dir);
    for failure in &bundle.failures {
        diagnostics.error(failure.to_string());
    }
    if !bundle.is_complete() {
        return RunReport {
            diagnostics,
            halted: Some(Stage::Load),
        };
    }
    info!(modules = bundle.modules.len(), "ontology bundle loaded");

    if options.skip_schema {
        info!("schema validation skipped by request");
    } else if !schema_stage(&options.ontology_dir, &bundle.modules, &mut diagnostics) {
        return RunReport {
            diagnostics,
            halted: Some(Stage::Schema),
        };
    }

    consistency_stage(&bundle.modules, reference, &mut diagnostics);
    info!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "validation finished"
    );

    RunReport {
        diagnostics,
        halted: None,
    }
}

/// Returns false when the run must halt before the consistency stage.
#[cfg(feature = "schema")]
fn schema_stage(
    root: &Path,
    modules: &BTreeMap<ModuleName, Document>,
    diagnostics: &mut Diagnostics,
) -> bool {
    use cbim_bundle::{SharedSchema, schema_path};

    let path = schema_path(root);
    if !path.exists() {
        diagnostics.error("schema.json not found");
        return false;
    }
    let schema = match SharedSchema::load(&path) {
        Ok(schema) => schema,
        Err(error) => {
            diagnostics.error(format!("{error:#}"));
            return false;
        }
    };
    for module in ModuleName::ALL {
        let Some(document) = modules.get(&module) else {
            continue;
        };
        if !schema.has_definition(module) {
            diagnostics.warn(format!(
                "schema.json has no $defs entry for {module}; skipping schema validation for this module"
            ));
            continue;
        }
        crate::schema::validate_module(module, document, &schema, diagnostics);
    }
    true
}

#[cfg(not(feature = "schema"))]
fn schema_stage(
    _root: &Path,
    _modules: &BTreeMap<ModuleName, Document>,
    diagnostics: &mut Diagnostics,
) -> bool {
    diagnostics.warn("jsonschema support not available; skipping schema validation");
    true
}

/// Run every consistency rule. Rules are independent and all run even if
/// earlier ones produced errors; each is guarded on the modules it reads
/// so an absent module skips cleanly.
fn consistency_stage(
    modules: &BTreeMap<ModuleName, Document>,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    let framework = modules.get(&ModuleName::CbimFramework);
    let provenance = modules.get(&ModuleName::Provenance);
    let temporal = modules.get(&ModuleName::TemporalPhases);
    let imaging = modules.get(&ModuleName::ImagingCdes);

    if let (Some(framework), Some(provenance)) = (framework, provenance) {
        checks::check_threshold_consistency(framework, provenance, reference, diagnostics);
    }
    if let Some(provenance) = provenance {
        checks::check_provenance_applicability(provenance, reference, diagnostics);
    }
    if let Some(temporal) = temporal {
        checks::check_temporal_kinetics(temporal, reference, diagnostics);
        checks::check_temporal_thresholds(temporal, reference, diagnostics);
        checks::check_phase_id_declarations(temporal, diagnostics);
    }
    if let (Some(temporal), Some(imaging)) = (temporal, imaging) {
        checks::check_phase_alignment(temporal, imaging, diagnostics);
    }
    if let Some(imaging) = imaging {
        checks::check_element_invariants(imaging, reference, diagnostics);
    }
    checks::check_mapping_hooks(modules, reference, diagnostics);
}
