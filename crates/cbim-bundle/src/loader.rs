use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use cbim_model::ModuleName;

use crate::document::{Document, DocumentError};

/// Why one module failed to load. Rendered messages are the load-stage
/// diagnostics, so they name the offending file directly.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Missing required ontology file: {file}")]
    Missing { file: &'static str },
    #[error("Failed to read ontology file {file}: {source}")]
    Io {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML parse error in {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Top-level shape of {file} is not a mapping")]
    NotAMapping { file: &'static str },
}

/// Result of attempting to load the whole bundle. Every module is
/// attempted before the run decides whether to halt, so `failures`
/// carries one entry per broken file.
#[derive(Debug)]
pub struct LoadedBundle {
    pub modules: BTreeMap<ModuleName, Document>,
    pub failures: Vec<LoadError>,
}

impl LoadedBundle {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load all seven modules from `root`, collecting failures instead of
/// stopping at the first one.
pub fn load_bundle(root: &Path) -> LoadedBundle {
    let mut modules = BTreeMap::new();
    let mut failures = Vec::new();
    for module in ModuleName::ALL {
        match load_module(root, module) {
            Ok(document) => {
                debug!(module = %module, "loaded ontology module");
                modules.insert(module, document);
            }
            Err(failure) => failures.push(failure),
        }
    }
    LoadedBundle { modules, failures }
}

/// Load a single module document.
pub fn load_module(root: &Path, module: ModuleName) -> Result<Document, LoadError> {
    let file = module.file_name();
    let path: PathBuf = root.join(file);
    if !path.exists() {
        return Err(LoadError::Missing { file });
    }
    let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io { file, source })?;
    Document::from_yaml_str(&text).map_err(|error| match error {
        DocumentError::Parse(source) => LoadError::Parse { file, source },
        DocumentError::NotAMapping => LoadError::NotAMapping { file },
    })
}
