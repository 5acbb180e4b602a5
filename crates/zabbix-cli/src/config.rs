use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;
use zabbix_rpc::ClientConfig;

const CONFIG_FILE: &str = "config.json";

/// `~/.config/zbx/config.json` on Linux, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "zbx").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Read the config file, if any, then apply `ZABBIX_*` overrides.
///
/// An explicit `path` must exist; the default location may be absent.
pub fn load(path: Option<&Path>) -> Result<ClientConfig> {
    let mut config = match path {
        Some(path) => read(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read(&path)?,
            _ => ClientConfig::new(""),
        },
    };

    config.merge_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn read(path: &Path) -> Result<ClientConfig> {
    debug!("Loading config from {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
}
