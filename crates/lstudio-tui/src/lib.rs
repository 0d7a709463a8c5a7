//! lstudio-tui - Terminal UI for Lesson Studio
//!
//! Renders an [`lstudio_app::Engine`]'s state with ratatui and feeds terminal
//! input back into it.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
