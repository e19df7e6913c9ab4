use std::fmt;

use serde::Serialize;

/// The two blood biomarkers the ontology tracks decision thresholds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Analyte {
    Gfap,
    Uchl1,
}

impl Analyte {
    pub const ALL: [Analyte; 2] = [Analyte::Gfap, Analyte::Uchl1];

    /// Biomarker variable identifier in the framework module.
    pub fn variable_id(self) -> &'static str {
        match self {
            Analyte::Gfap => "gfap_pg_ml",
            Analyte::Uchl1 => "uchl1_pg_ml",
        }
    }

    /// Key under kinetics and clearance blocks in the temporal module.
    pub fn kinetics_key(self) -> &'static str {
        match self {
            Analyte::Gfap => "gfap",
            Analyte::Uchl1 => "uchl1",
        }
    }

    /// Field name under `threshold_provenance` in the provenance module.
    pub fn provenance_field(self) -> &'static str {
        match self {
            Analyte::Gfap => "gfap_ct_threshold",
            Analyte::Uchl1 => "uchl1_ct_threshold",
        }
    }

    /// Human-readable analyte name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Analyte::Gfap => "GFAP",
            Analyte::Uchl1 => "UCH-L1",
        }
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
