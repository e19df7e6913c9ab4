use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Value, json};

use cbim_model::ModuleName;

/// File name of the shared schema at the bundle root.
const SCHEMA_FILE: &str = "schema.json";

pub fn schema_path(root: &Path) -> PathBuf {
    root.join(SCHEMA_FILE)
}

/// The shared schema definition file: a `$defs` map from module key to
/// that module's sub-schema.
#[derive(Debug, Clone)]
pub struct SharedSchema {
    schema: Value,
}

impl SharedSchema {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read schema: {}", path.display()))?;
        let schema: Value = serde_json::from_str(&text)
            .with_context(|| format!("parse schema: {}", path.display()))?;
        Ok(Self { schema })
    }

    pub fn has_definition(&self, module: ModuleName) -> bool {
        self.schema
            .get("$defs")
            .and_then(Value::as_object)
            .is_some_and(|defs| defs.contains_key(module.key()))
    }

    /// Build the standalone schema that validates one module: a `$ref`
    /// into the shared `$defs` map.
    pub fn module_schema(&self, module: ModuleName) -> Value {
        json!({
            "$schema": self.schema.get("$schema").cloned().unwrap_or(Value::Null),
            "$ref": format!("#/$defs/{}", module.key()),
            "$defs": self.schema.get("$defs").cloned().unwrap_or_else(|| json!({})),
        })
    }
}
