use std::fs;
use std::path::{Path, PathBuf};

use crate::model::PlannerConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

pub const CONFIG_FILE: &str = "config.toml";

/// Read config.toml from the data directory. An absent file yields the
/// defaults; a present but malformed file is an error (a typo should be
/// fixed, not silently ignored).
pub fn read_config(dir: &Path) -> Result<PlannerConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(PlannerConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
