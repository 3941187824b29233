use crate::output::{print_json, print_table};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use sprinova_core::config::Config;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Check sprinova.yaml for problems
    Validate,
    /// Print the effective configuration
    Show,
}

pub fn run(root: &Path, subcommand: ConfigSubcommand, json: bool) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Validate => run_validate(root, json),
        ConfigSubcommand::Show => run_show(root, json),
    }
}

fn run_validate(root: &Path, json: bool) -> Result<()> {
    let config = Config::load(root).map_err(|e| anyhow!("{e}"))?;
    let warnings = config.validate();

    if json {
        print_json(&warnings)?;
        return Ok(());
    }

    if warnings.is_empty() {
        println!("Configuration OK");
        return Ok(());
    }

    let headers = &["LEVEL", "MESSAGE"];
    let rows: Vec<Vec<String>> = warnings
        .iter()
        .map(|w| vec![format!("{:?}", w.level).to_lowercase(), w.message.clone()])
        .collect();
    print_table(headers, rows);
    Ok(())
}

fn run_show(root: &Path, json: bool) -> Result<()> {
    let config = Config::load_or_default(root).map_err(|e| anyhow!("{e}"))?;
    if json {
        print_json(&config)?;
    } else {
        print!("{}", serde_yaml::to_string(&config)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_fails_without_config() {
        let dir = TempDir::new().unwrap();
        assert!(run_validate(dir.path(), false).is_err());
    }

    #[test]
    fn validate_passes_on_default_config() {
        let dir = TempDir::new().unwrap();
        Config::default().save(dir.path()).unwrap();
        assert!(run_validate(dir.path(), false).is_ok());
    }

    #[test]
    fn show_works_without_config() {
        let dir = TempDir::new().unwrap();
        assert!(run_show(dir.path(), false).is_ok());
    }
}
