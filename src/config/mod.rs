#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::TasktabError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Task database location; relative paths resolve against the current
    /// directory.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("database.json"),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), TasktabError> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(TasktabError::Config(
                "storage.path must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Platform config file, `~/.config/tasktab/config.toml` on Linux.
pub fn config_file() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tasktab")
        .context("failed to determine platform config directory")?;
    Ok(dirs.config_dir().join("config.toml"))
}

pub fn load() -> anyhow::Result<Config> {
    let cfg = load_from_file(&config_file()?)?;
    cfg.validate()?;
    Ok(cfg)
}

fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: Config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse TOML in {}", path.display()))?;
    Ok(cfg)
}

/// Resolves the configured storage path into an absolute location.
pub fn resolve_storage_path(cfg: &Config) -> anyhow::Result<PathBuf> {
    let path = &cfg.storage.path;
    if path.is_absolute() {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_defaults() {
        let td = tempfile::tempdir().expect("tempdir");
        let cfg = load_from_file(&td.path().join("config.toml")).expect("load");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.storage.path, PathBuf::from("database.json"));
    }

    #[test]
    fn storage_path_is_read_from_toml() {
        let td = tempfile::tempdir().expect("tempdir");
        let file = td.path().join("config.toml");
        std::fs::write(&file, "[storage]\npath = \"/tmp/tasks.json\"\n").expect("write");

        let cfg = load_from_file(&file).expect("load");
        assert_eq!(cfg.storage.path, PathBuf::from("/tmp/tasks.json"));
        cfg.validate().expect("valid");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("").expect("parse");
        assert_eq!(cfg.storage.path, PathBuf::from("database.json"));
    }

    #[test]
    fn empty_storage_path_is_rejected() {
        let cfg: Config = toml::from_str("[storage]\npath = \"\"\n").expect("parse");
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, TasktabError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let td = tempfile::tempdir().expect("tempdir");
        let file = td.path().join("config.toml");
        std::fs::write(&file, "[storage\npath = 3").expect("write");
        assert!(load_from_file(&file).is_err());
    }

    #[test]
    fn absolute_storage_path_is_used_as_is() {
        let cfg = Config {
            storage: StorageConfig {
                path: PathBuf::from("/var/lib/tasktab/db.json"),
            },
        };
        let resolved = resolve_storage_path(&cfg).expect("resolve");
        assert_eq!(resolved, PathBuf::from("/var/lib/tasktab/db.json"));
    }

    #[test]
    fn relative_storage_path_resolves_against_cwd() {
        let resolved = resolve_storage_path(&Config::default()).expect("resolve");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("database.json"));
    }
}
