use crate::{Analyte, ModuleName};

/// Absolute tolerance for threshold comparisons. Relative tolerance is
/// deliberately zero: two thresholds are consistent iff their numeric
/// difference is at most this bound.
pub const TOLERANCE: f64 = 1e-9;

/// Tolerance-based equality for decision thresholds.
///
/// Symmetric in its operands; kinetics and identifier comparisons do NOT
/// use this, they compare exactly.
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Published clearance kinetics for one analyte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearanceReference {
    pub half_life_hours: f64,
    pub half_life_range_hours: [f64; 2],
}

/// The published reference values the consistency rules compare against.
///
/// Injected into the rule set rather than embedded in rule bodies so the
/// constants can be revised and tested independently of rule logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceValues {
    /// GFAP decision threshold, pg/mL.
    pub gfap_ct_threshold_pg_ml: f64,
    /// UCH-L1 decision threshold, pg/mL.
    pub uchl1_ct_threshold_pg_ml: f64,
    pub gfap_clearance: ClearanceReference,
    pub uchl1_clearance: ClearanceReference,
    /// Contexts every threshold-provenance block must apply to.
    pub required_threshold_contexts: &'static [&'static str],
    pub core_cde_count: usize,
    pub supplementary_cde_count: usize,
    /// Supplementary CDE identifier that must be present.
    pub required_supplementary_id: &'static str,
    /// Retired supplementary CDE identifier that must be absent.
    pub deprecated_supplementary_id: &'static str,
    /// Keys the default cross-standard mapping template must carry.
    pub required_mapping_keys: &'static [&'static str],
    /// Modules that must flag their mapping fields as optional.
    pub mapping_hook_modules: &'static [ModuleName],
}

impl ReferenceValues {
    pub fn ct_threshold(&self, analyte: Analyte) -> f64 {
        match analyte {
            Analyte::Gfap => self.gfap_ct_threshold_pg_ml,
            Analyte::Uchl1 => self.uchl1_ct_threshold_pg_ml,
        }
    }

    pub fn clearance(&self, analyte: Analyte) -> &ClearanceReference {
        match analyte {
            Analyte::Gfap => &self.gfap_clearance,
            Analyte::Uchl1 => &self.uchl1_clearance,
        }
    }
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            gfap_ct_threshold_pg_ml: 30.0,
            uchl1_ct_threshold_pg_ml: 360.0,
            gfap_clearance: ClearanceReference {
                half_life_hours: 24.0,
                half_life_range_hours: [24.0, 36.0],
            },
            uchl1_clearance: ClearanceReference {
                half_life_hours: 8.0,
                half_life_range_hours: [7.0, 9.0],
            },
            required_threshold_contexts: &["adult", "mild_tbi"],
            core_cde_count: 9,
            supplementary_cde_count: 18,
            required_supplementary_id: "tapvi",
            deprecated_supplementary_id: "tamvi",
            required_mapping_keys: &[
                "radlex_id",
                "dicom_sr_code",
                "fhir_observation_code",
                "omop_concept_id",
            ],
            mapping_hook_modules: &[
                ModuleName::CbimFramework,
                ModuleName::ClinicalEntities,
                ModuleName::ImagingCdes,
                ModuleName::Provenance,
                ModuleName::ImplementationScience,
            ],
        }
    }
}
