//! Ontology bundle loading.
//!
//! Resolves the bundle directory, parses the seven YAML modules into
//! generic document trees and loads the shared JSON Schema. Parsing is
//! delegated to `serde_yaml`; this crate only decides what counts as a
//! load failure and gives the rule set a uniform way to walk documents.

mod document;
mod loader;
mod paths;
mod schema;

pub use document::{Document, DocumentError};
pub use loader::{LoadError, LoadedBundle, load_bundle, load_module};
pub use paths::{ONTOLOGY_ENV_VAR, ontology_root};
pub use schema::{SharedSchema, schema_path};
