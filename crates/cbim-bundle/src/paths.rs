//! Bundle directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the bundle directory.
pub const ONTOLOGY_ENV_VAR: &str = "CBIM_ONTOLOGY_DIR";

/// Get the ontology bundle root directory.
///
/// Resolution order:
/// 1. `CBIM_ONTOLOGY_DIR` environment variable
/// 2. the directory containing the running executable
/// 3. the current directory
pub fn ontology_root() -> PathBuf {
    if let Ok(root) = std::env::var(ONTOLOGY_ENV_VAR) {
        return PathBuf::from(root);
    }
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        return dir.to_path_buf();
    }
    PathBuf::from(".")
}
