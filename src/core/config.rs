use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::NodeError;

const SETTINGS_FILE: &str = "settings.json";

/// Optional host-side configuration. When `search_paths` is non-empty it
/// replaces the default base-directory candidates used for folder resolution;
/// relative entries are joined to the host root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Settings::default();
    }
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

pub fn save_settings(dir: &Path, settings: &Settings) -> Result<(), NodeError> {
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(dir.join(SETTINGS_FILE), content)?;
    Ok(())
}
