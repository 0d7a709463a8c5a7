//! Lesson Studio Library
//!
//! A terminal lesson planner: type a lesson title, pick a teaching strategy,
//! and get a lesson plan and explanations from a generative model.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run, LaunchOptions};
pub use headless::{run_headless, ExplainTarget, HeadlessRequest};
