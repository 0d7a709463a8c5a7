//! lstudio-app - Application state and orchestration for Lesson Studio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] drives
//! [`handler::update`], and [`UpdateAction`]s become background tasks. The
//! [`Engine`] ties the loop to a generation service and is shared by the TUI
//! and headless frontends.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod locale;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod step_viewer;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{GeneratedContent, GenerationJob, GenerationOutcome, Message};
pub use state::{AppPhase, AppState, Focus, LoadingState, Notice, NoticeLevel};
pub use step_viewer::StepViewerState;
