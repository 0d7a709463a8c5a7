//! Core domain types shared by every crate

use serde::{Deserialize, Serialize};

/// Mutually exclusive display mode of the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Initial state, nothing generated yet
    #[default]
    Welcome,
    /// The generated lesson plan
    Plan,
    /// Plain-language explanation of the selected strategy
    StrategyExplanation,
    /// Interactive walkthrough of the lesson built around the strategy
    LessonExplanation,
}

impl ViewState {
    /// Whether this view displays an explanation (and so can return to the plan)
    pub fn is_explanation(&self) -> bool {
        matches!(
            self,
            ViewState::StrategyExplanation | ViewState::LessonExplanation
        )
    }
}

/// Output language for prompts, catalog labels and user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Human-readable name used inside prompts ("Answer in ...")
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }

    /// Short code as used in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Parse a language code (`en`, `ar`), case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "ar" | "arabic" => Some(Language::Arabic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The three kinds of generation request the application can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Lesson plan for a title + strategy
    Plan,
    /// Explanation of a strategy on its own
    StrategyExplanation,
    /// Step-by-step interactive explanation of the lesson
    LessonExplanation,
}

impl RequestKind {
    /// View shown once this request succeeds
    pub fn target_view(&self) -> ViewState {
        match self {
            RequestKind::Plan => ViewState::Plan,
            RequestKind::StrategyExplanation => ViewState::StrategyExplanation,
            RequestKind::LessonExplanation => ViewState::LessonExplanation,
        }
    }

    /// View restored when this request fails
    pub fn fallback_view(&self) -> ViewState {
        match self {
            RequestKind::Plan => ViewState::Welcome,
            RequestKind::StrategyExplanation | RequestKind::LessonExplanation => ViewState::Plan,
        }
    }

    /// Whether the view switches before the result arrives
    pub fn switches_optimistically(&self) -> bool {
        !matches!(self, RequestKind::Plan)
    }

    /// Whether the service is asked for structured (JSON) output
    pub fn wants_json(&self) -> bool {
        matches!(self, RequestKind::LessonExplanation)
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Plan => write!(f, "plan"),
            RequestKind::StrategyExplanation => write!(f, "strategy_explanation"),
            RequestKind::LessonExplanation => write!(f, "lesson_explanation"),
        }
    }
}
