//! Configuration for Lesson Studio
//!
//! A single TOML file, `<config_dir>/lesson-studio/config.toml`, holds the
//! generation, UI and export settings. Every key is optional.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, resolve_api_key,
    CONFIG_FILENAME,
};
pub use types::*;
