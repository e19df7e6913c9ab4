//! Schema-stage adapter over the `jsonschema` crate.

/// Convert a JSON-pointer instance path (`/a/0/b`) into the dotted form
/// used in diagnostics (`a.0.b`). Root-level violations map to an empty
/// path.
pub fn dotted_instance_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

/// Validate one module against its `$defs` entry, reporting one error
/// per violation.
#[cfg(feature = "schema")]
pub(crate) fn validate_module(
    module: cbim_model::ModuleName,
    document: &cbim_bundle::Document,
    schema: &cbim_bundle::SharedSchema,
    diagnostics: &mut cbim_model::Diagnostics,
) {
    let module_schema = schema.module_schema(module);
    let validator = match jsonschema::validator_for(&module_schema) {
        Ok(validator) => validator,
        Err(error) => {
            diagnostics.error(format!(
                "schema definition for {} does not compile: {error}",
                module.key()
            ));
            return;
        }
    };
    for violation in validator.iter_errors(document.as_value()) {
        let path = dotted_instance_path(&violation.instance_path.to_string());
        if path.is_empty() {
            diagnostics.error(format!(
                "{} schema validation failed: {violation}",
                module.key()
            ));
        } else {
            diagnostics.error(format!(
                "{} schema validation failed at '{path}': {violation}",
                module.key()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dotted_instance_path;

    #[test]
    fn converts_json_pointers_to_dotted_paths() {
        assert_eq!(dotted_instance_path("/a/0/b"), "a.0.b");
        assert_eq!(dotted_instance_path("/channels"), "channels");
        assert_eq!(dotted_instance_path(""), "");
    }
}
