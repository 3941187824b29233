use anyhow::{anyhow, Result};
use sprinova_core::config::Config;
use sprinova_core::{io, paths};
use std::path::Path;

/// Write a default sprinova.yaml, leaving an existing one untouched.
pub fn run(root: &Path, json: bool) -> Result<()> {
    let config = Config::default();
    let data = serde_yaml::to_string(&config)?;
    let path = paths::config_path(root);
    let written = io::write_if_missing(&path, data.as_bytes()).map_err(|e| anyhow!("{e}"))?;

    if json {
        crate::output::print_json(&serde_json::json!({
            "path": path,
            "created": written,
        }))?;
    } else if written {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists, leaving it as is", path.display());
    }
    Ok(())
}
