//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up tacticus CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
pub fn handle(data_dir: Option<PathBuf>, backup: Option<bool>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if data_dir.is_none() && backup.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, data_dir, backup);
    config.save()?;

    println!("Configuration updated");
    show_config(&config)?;
    Ok(())
}

fn apply(config: &mut Config, data_dir: Option<PathBuf>, backup: Option<bool>) {
    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(backup) = backup {
        config.backup = Some(backup);
    }
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    println!("Data directory: {}", config.data_dir()?.display());
    println!(
        "Backups: {}",
        if config.backup_enabled() { "on" } else { "off" }
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

fn show_usage() {
    println!("Usage: tacticus configure --data-dir DIR");
    println!("   or: tacticus configure --backup false");
    println!("   or: tacticus configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_values() {
        let mut config = Config {
            data_dir: Some(PathBuf::from("/old")),
            backup: Some(false),
        };
        apply(&mut config, None, Some(true));
        assert_eq!(config.data_dir, Some(PathBuf::from("/old")));
        assert_eq!(config.backup, Some(true));

        apply(&mut config, Some(PathBuf::from("/new")), None);
        assert_eq!(config.data_dir, Some(PathBuf::from("/new")));
        assert_eq!(config.backup, Some(true));
    }

    #[test]
    fn test_config_path_exists() {
        assert!(Config::config_path().is_ok());
    }
}
