use super::keymap::KeyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub keys: KeyConfig,
}

pub fn config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("omniswitch");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    /// Load the user config, falling back to defaults when the file is
    /// missing or malformed. Configuration is best-effort; it never blocks
    /// startup.
    #[must_use]
    pub fn load() -> Self {
        config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str::<AppConfig>(&content) {
                return config;
            }
        }
        Self::default()
    }
}
