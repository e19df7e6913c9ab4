use serde_json::{Map, Value};

/// One loaded ontology module: a mapping at the top level over a generic
/// mapping/sequence/scalar tree.
///
/// YAML is parsed straight into `serde_json::Value` so the same tree feeds
/// both schema validation and the consistency rules. An explicit `null` is
/// treated as an absent field everywhere, matching the bundle's authoring
/// convention of nulling out retired fields.
#[derive(Debug, Clone)]
pub struct Document {
    value: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),
    #[error("top-level value is not a mapping")]
    NotAMapping,
}

impl Document {
    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(text)?;
        if !value.is_object() {
            return Err(DocumentError::NotAMapping);
        }
        Ok(Self { value })
    }

    /// The whole document tree, for schema validation.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Walk nested mappings along `path`. Returns `None` when any segment
    /// is absent, not a mapping, or the final value is `null`.
    pub fn value_at(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.value;
        for segment in path {
            current = current.get(segment)?;
        }
        if current.is_null() { None } else { Some(current) }
    }

    pub fn f64_at(&self, path: &[&str]) -> Option<f64> {
        self.value_at(path)?.as_f64()
    }

    pub fn mapping_at(&self, path: &[&str]) -> Option<&Map<String, Value>> {
        self.value_at(path)?.as_object()
    }

    pub fn sequence_at(&self, path: &[&str]) -> Option<&[Value]> {
        self.value_at(path).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// String items of the sequence at `path`; empty when the sequence is
    /// absent. Non-string items are skipped.
    pub fn str_list_at(&self, path: &[&str]) -> Vec<&str> {
        self.sequence_at(path)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }
}
