//! Settings loading and the API credential lookup

use std::path::{Path, PathBuf};

use lstudio_core::prelude::*;

use super::types::{GenerationSettings, Settings};

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "lesson-studio";

/// `<config_dir>/lesson-studio/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet
///
/// Returns the path of the (possibly pre-existing) file.
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(config_path.to_path_buf());
    }

    let default_content = r#"# Lesson Studio Configuration

[generation]
# Model used for every request
model = "gemini-2.5-flash"
# Base endpoint of the Generative Language API
endpoint = "https://generativelanguage.googleapis.com/v1beta"
# Per-request timeout in seconds
timeout_secs = 60
# Sampling temperature
temperature = 0.7
# Environment variable holding the API key
api_key_env = "GEMINI_API_KEY"

[ui]
# Output language: "en" or "ar"
language = "en"
# Icon style: "unicode" or "nerd_fonts"
icons = "unicode"
# How long status-bar notices stay visible, in ticks (about 50ms each)
notice_ticks = 60

[export]
# Where exported lesson plans are written
directory = "."
"#;

    std::fs::write(config_path, default_content).map_err(|e| {
        Error::config(format!(
            "Failed to write {}: {}",
            config_path.display(),
            e
        ))
    })?;
    info!("Created default config at {:?}", config_path);
    Ok(config_path.to_path_buf())
}

/// Read the API key from the environment variable named in the settings
///
/// A missing or blank key is fatal at startup.
pub fn resolve_api_key(settings: &GenerationSettings) -> Result<String> {
    match std::env::var(&settings.api_key_env) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(Error::missing_credential(&settings.api_key_env)),
    }
}
