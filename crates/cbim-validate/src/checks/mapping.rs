use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use cbim_bundle::Document;
use cbim_model::{Diagnostics, ModuleName, ReferenceValues};

/// Modules that carry cross-standard mapping fields must flag them as
/// optional in their schema contract, and the imaging module's default
/// mapping template must cover the required key set.
pub fn check_mapping_hooks(
    modules: &BTreeMap<ModuleName, Document>,
    reference: &ReferenceValues,
    diagnostics: &mut Diagnostics,
) {
    for module in reference.mapping_hook_modules {
        let Some(document) = modules.get(module) else {
            continue;
        };
        let flag = document.value_at(&["schema_contract", "mapping_fields_optional"]);
        if !flag.is_some_and(is_truthy) {
            diagnostics.error(format!(
                "{} missing schema_contract.mapping_fields_optional",
                module.file_name()
            ));
        }
    }

    let Some(imaging) = modules.get(&ModuleName::ImagingCdes) else {
        return;
    };
    let template_keys: BTreeSet<&str> = imaging
        .mapping_at(&["standards_mapping_hooks", "default_mapping_template"])
        .map(|template| template.keys().map(String::as_str).collect())
        .unwrap_or_default();
    let mut missing: Vec<&str> = reference
        .required_mapping_keys
        .iter()
        .copied()
        .filter(|key| !template_keys.contains(key))
        .collect();
    missing.sort_unstable();
    if !missing.is_empty() {
        diagnostics.error(format!(
            "{} standards_mapping_hooks.default_mapping_template missing keys: {missing:?}",
            ModuleName::ImagingCdes.file_name()
        ));
    }
}

/// Python-style truthiness, matching how the bundle's authors toggle
/// schema-contract flags (absent, `false`, `0`, `""` and empty
/// containers all mean unset).
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|v| v != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
