//! Configuration types for Lesson Studio
//!
//! Defines:
//! - `Settings` - Root of `config.toml`
//! - `GenerationSettings`, `UiSettings`, `ExportSettings` - Its sections
//! - `IconMode` - Glyph set used by the terminal UI

use std::path::PathBuf;

use lstudio_core::Language;
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Generation service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Model name passed to the service
    #[serde(default = "default_model")]
    pub model: String,

    /// Base API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.7
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs (requires a Nerd Font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Language for prompts, catalog labels and messages: "en" or "ar"
    #[serde(default)]
    pub language: Language,

    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// How many ticks a status-bar notice stays visible
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            icons: IconMode::default(),
            notice_ticks: default_notice_ticks(),
        }
    }
}

fn default_notice_ticks() -> u32 {
    60
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory exported plans are written to
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generation.model, "gemini-2.5-flash");
        assert_eq!(settings.generation.timeout_secs, 60);
        assert_eq!(settings.generation.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.ui.language, Language::English);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.notice_ticks, 60);
        assert_eq!(settings.export.directory, PathBuf::from("."));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[generation]
model = "gemini-2.5-pro"

[ui]
language = "ar"
"#,
        )
        .unwrap();
        assert_eq!(settings.generation.model, "gemini-2.5-pro");
        assert_eq!(settings.generation.timeout_secs, 60);
        assert_eq!(settings.ui.language, Language::Arabic);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_icon_mode_parsing() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[ui]\nlanguage = \"fr\"\n");
        assert!(result.is_err());
    }
}
