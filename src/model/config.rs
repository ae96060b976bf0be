use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from celeb.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Seed file to load instead of the bundled data
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Records younger than this cannot enter edit mode
    #[serde(default = "default_min_edit_age")]
    pub min_edit_age: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            min_edit_age: default_min_edit_age(),
        }
    }
}

fn default_min_edit_age() -> u32 {
    18
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Color overrides, keyed by theme slot (e.g. "background" = "#0C001B")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
