use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "celeb.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read the config at `path`. An explicit path must exist; without one,
/// `celeb.toml` in `cwd` is used if present, otherwise defaults.
pub fn read_config(path: Option<&Path>, cwd: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    let text = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}
