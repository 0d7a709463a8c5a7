//! Centralized theme for the Lesson Studio TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs for strategies and explanation steps, per icon mode

pub mod icons;
pub mod palette;
pub mod styles;
