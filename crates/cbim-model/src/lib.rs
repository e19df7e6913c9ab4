//! Data model for the CBIM ontology bundle validator.
//!
//! Defines the fixed module set, the diagnostic types shared by every
//! validation stage, and the published reference values the consistency
//! rules compare against.

mod analyte;
mod diagnostic;
mod module;
mod reference;

pub use analyte::Analyte;
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use module::{ModuleName, ParseModuleNameError};
pub use reference::{ClearanceReference, ReferenceValues, TOLERANCE, nearly_equal};
