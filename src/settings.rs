use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UpdateError};
use crate::fragment::FragmentStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub unit_id: i64,
    pub plu: String,
    pub old_price: String,
    pub new_price: String,
    pub input_path: String,
    pub output_path: String,
    pub db_path: String,
    pub style: FragmentStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_id: 94,
            plu: "999".to_string(),
            old_price: "0".to_string(),
            new_price: "0".to_string(),
            input_path: "test.rs".to_string(),
            output_path: "test2.rs".to_string(),
            db_path: default_db_path().to_string_lossy().to_string(),
            style: FragmentStyle::Menu,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("menu-price-update")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_db_path() -> PathBuf {
    config_dir().join("reporting.db")
}

/// Missing or unparsable settings fall back to the defaults. A file that
/// exists but cannot be used is logged.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
            return Settings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "could not parse settings, using defaults");
        Settings::default()
    })
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| UpdateError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
