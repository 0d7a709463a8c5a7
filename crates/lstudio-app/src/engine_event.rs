//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use lstudio_core::{InteractiveExplanation, RequestKind, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The content area switched views
    ViewChanged { from: ViewState, to: ViewState },

    /// A generation request was sent
    RequestStarted { kind: RequestKind },

    /// A new lesson plan was stored
    PlanReady { plan: String },

    /// A new explanation (strategy or lesson) was stored
    ExplanationReady { explanation: InteractiveExplanation },

    /// A request failed; `message` is the localized text shown to the user
    GenerationFailed { kind: RequestKind, message: String },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name used in logs and NDJSON output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::ViewChanged { .. } => "view_changed",
            EngineEvent::RequestStarted { .. } => "request_started",
            EngineEvent::PlanReady { .. } => "plan_ready",
            EngineEvent::ExplanationReady { .. } => "explanation_ready",
            EngineEvent::GenerationFailed { .. } => "error",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
