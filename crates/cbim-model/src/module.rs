use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The seven fixed modules of the ontology bundle.
///
/// `ALL` preserves the bundle's canonical order; loading, schema checks and
/// reporting all iterate in this order so diagnostics are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleName {
    CbimFramework,
    ClinicalEntities,
    ImagingCdes,
    TemporalPhases,
    Provenance,
    ImplementationScience,
    MethodologyExtraction,
}

impl ModuleName {
    pub const ALL: [ModuleName; 7] = [
        ModuleName::CbimFramework,
        ModuleName::ClinicalEntities,
        ModuleName::ImagingCdes,
        ModuleName::TemporalPhases,
        ModuleName::Provenance,
        ModuleName::ImplementationScience,
        ModuleName::MethodologyExtraction,
    ];

    /// The module key used in schema `$defs` and diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            ModuleName::CbimFramework => "cbim_framework",
            ModuleName::ClinicalEntities => "clinical_entities",
            ModuleName::ImagingCdes => "imaging_cdes",
            ModuleName::TemporalPhases => "temporal_phases",
            ModuleName::Provenance => "provenance",
            ModuleName::ImplementationScience => "implementation_science",
            ModuleName::MethodologyExtraction => "methodology_extraction",
        }
    }

    /// The document file name inside the bundle directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ModuleName::CbimFramework => "cbim_framework.yaml",
            ModuleName::ClinicalEntities => "clinical_entities.yaml",
            ModuleName::ImagingCdes => "imaging_cdes.yaml",
            ModuleName::TemporalPhases => "temporal_phases.yaml",
            ModuleName::Provenance => "provenance.yaml",
            ModuleName::ImplementationScience => "implementation_science.yaml",
            ModuleName::MethodologyExtraction => "methodology_extraction.yaml",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown ontology module: {name}")]
pub struct ParseModuleNameError {
    name: String,
}

impl FromStr for ModuleName {
    type Err = ParseModuleNameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ModuleName::ALL
            .into_iter()
            .find(|module| module.key() == raw)
            .ok_or_else(|| ParseModuleNameError {
                name: raw.to_string(),
            })
    }
}
