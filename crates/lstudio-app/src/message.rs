//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use lstudio_core::{InteractiveExplanation, RequestKind, Strategy};

use crate::input_key::InputKey;
use crate::state::Focus;

/// Everything a generation task needs, captured when the request starts
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationJob {
    pub kind: RequestKind,
    /// Trimmed lesson title
    pub title: String,
    pub strategy: &'static Strategy,
}

/// Content produced by a successful generation call
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    Plan(String),
    StrategyExplanation(String),
    LessonExplanation(InteractiveExplanation),
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Succeeded(GeneratedContent),
    /// `error` is the technical cause; the user sees a localized message
    Failed { error: String },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animation, notice expiry)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus & Input
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    Focus(Focus),
    /// Replace the lesson title
    TitleInput { text: String },

    // ─────────────────────────────────────────────────────────
    // Strategy Catalog
    // ─────────────────────────────────────────────────────────
    StrategyCursorUp,
    StrategyCursorDown,
    /// Select the strategy at `index` and request a lesson plan
    SelectStrategy { index: usize },

    // ─────────────────────────────────────────────────────────
    // View Transitions
    // ─────────────────────────────────────────────────────────
    ExplainStrategy,
    ExplainLesson,
    ShowPlan,

    // ─────────────────────────────────────────────────────────
    // Content Navigation
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    NextStep,
    PreviousStep,
    SelectStep(usize),

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    Export,
    ExportFinished { result: Result<PathBuf, String> },

    // ─────────────────────────────────────────────────────────
    // Background Results
    // ─────────────────────────────────────────────────────────
    GenerationFinished {
        job: GenerationJob,
        outcome: GenerationOutcome,
    },
}
