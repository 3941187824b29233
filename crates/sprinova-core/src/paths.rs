use std::path::{Path, PathBuf};

/// Name of the site configuration file at the site root.
pub const CONFIG_FILE: &str = "sprinova.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
