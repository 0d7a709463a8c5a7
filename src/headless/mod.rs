//! Headless mode - NDJSON event output instead of the TUI
//!
//! Drives the same engine as the terminal interface and writes one JSON
//! object per line to stdout, so scripts can generate a plan (and an
//! explanation) without parsing terminal escape codes.
//!
//! # Example Output
//!
//! ```json
//! {"event":"view_changed","from":"welcome","to":"plan","timestamp":1760600000000}
//! {"event":"plan_ready","title":"Water cycle","strategy":"brainstorming","plan":"# ...","timestamp":1760600000001}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use lstudio_app::EngineEvent;
use lstudio_core::{ExplanationBody, ViewState};

pub use runner::{run_headless, run_headless_to, ExplainTarget, HeadlessRequest};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The content area switched views
    ViewChanged {
        from: ViewState,
        to: ViewState,
        timestamp: i64,
    },

    /// A lesson plan was generated
    PlanReady {
        title: String,
        strategy: String,
        plan: String,
        timestamp: i64,
    },

    /// An explanation was generated; steps are flattened to Markdown
    ExplanationReady {
        /// Catalog id, as in `plan_ready`
        strategy: String,
        /// Display name the explanation was generated for
        strategy_name: String,
        /// Number of steps, 0 for a plain-text explanation
        steps: usize,
        content: String,
        timestamp: i64,
    },

    /// Something went wrong
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event; `None` for events with no headless form
    pub fn from_engine(event: &EngineEvent, title: &str, strategy_id: &str) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::ViewChanged { from, to } => Some(Self::ViewChanged {
                from: *from,
                to: *to,
                timestamp,
            }),
            EngineEvent::PlanReady { plan } => Some(Self::PlanReady {
                title: title.to_string(),
                strategy: strategy_id.to_string(),
                plan: plan.clone(),
                timestamp,
            }),
            EngineEvent::ExplanationReady { explanation } => Some(Self::ExplanationReady {
                strategy: strategy_id.to_string(),
                strategy_name: explanation.strategy.clone(),
                steps: match &explanation.body {
                    ExplanationBody::Steps(steps) => steps.len(),
                    ExplanationBody::Text(_) => 0,
                },
                content: explanation.to_markdown(),
                timestamp,
            }),
            EngineEvent::GenerationFailed { message, .. } => Some(Self::Error {
                message: message.clone(),
                fatal: false,
                timestamp,
            }),
            EngineEvent::RequestStarted { .. } | EngineEvent::Shutdown => None,
        }
    }
}
