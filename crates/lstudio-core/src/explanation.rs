//! Interactive explanation model
//!
//! An explanation is either a single block of text or an ordered, non-empty
//! list of steps. Each step carries an icon tag from a closed set; unknown
//! tags resolve to [`StepIcon::Default`].

use serde::{Deserialize, Serialize};

/// Icon attached to an interactive step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Predict,
    Question,
    Clarify,
    Summarize,
    Group,
    Discuss,
    Create,
    Present,
    Evaluate,
    Reflect,
    Search,
    Play,
    Brainstorm,
    Map,
    WhiteHat,
    RedHat,
    BlackHat,
    YellowHat,
    GreenHat,
    BlueHat,
    /// Fallback for tags outside the recognized set
    #[default]
    Default,
}

/// Recognized tags, in the order they are offered to the generation service
const ICON_TAGS: &[(&str, StepIcon)] = &[
    ("predict", StepIcon::Predict),
    ("question", StepIcon::Question),
    ("clarify", StepIcon::Clarify),
    ("summarize", StepIcon::Summarize),
    ("group", StepIcon::Group),
    ("discuss", StepIcon::Discuss),
    ("create", StepIcon::Create),
    ("present", StepIcon::Present),
    ("evaluate", StepIcon::Evaluate),
    ("reflect", StepIcon::Reflect),
    ("search", StepIcon::Search),
    ("play", StepIcon::Play),
    ("brainstorm", StepIcon::Brainstorm),
    ("map", StepIcon::Map),
    ("white_hat", StepIcon::WhiteHat),
    ("red_hat", StepIcon::RedHat),
    ("black_hat", StepIcon::BlackHat),
    ("yellow_hat", StepIcon::YellowHat),
    ("green_hat", StepIcon::GreenHat),
    ("blue_hat", StepIcon::BlueHat),
];

impl StepIcon {
    /// Resolve a tag, falling back to [`StepIcon::Default`]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        ICON_TAGS
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(tag))
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }

    /// Canonical tag, `None` for the default icon
    pub fn tag(&self) -> Option<&'static str> {
        ICON_TAGS
            .iter()
            .find(|(_, icon)| icon == self)
            .map(|(t, _)| *t)
    }

    /// All recognized tags
    pub fn known_tags() -> impl Iterator<Item = &'static str> {
        ICON_TAGS.iter().map(|(t, _)| *t)
    }
}

/// One navigable step of an interactive explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveStep {
    pub title: String,
    pub icon: StepIcon,
    /// Markdown-like text, rendered through [`crate::render_content`]
    pub content: String,
}

/// Payload of an explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExplanationBody {
    /// Non-empty ordered steps
    Steps(Vec<InteractiveStep>),
    Text(String),
}

/// A generated explanation, immutable once produced
///
/// `id` gives every stored explanation its own identity so that views bound
/// to it (such as the step viewer) can tell a new explanation from the one
/// they already show, even when the contents are equal. Freshly generated
/// explanations carry id 0 until the owner stamps them with [`Self::with_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveExplanation {
    pub id: u64,
    /// Display name of the strategy the explanation was generated for
    pub strategy: String,
    pub body: ExplanationBody,
}

impl InteractiveExplanation {
    pub fn text(id: u64, strategy: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            strategy: strategy.into(),
            body: ExplanationBody::Text(text.into()),
        }
    }

    pub fn steps(id: u64, strategy: impl Into<String>, steps: Vec<InteractiveStep>) -> Self {
        Self {
            id,
            strategy: strategy.into(),
            body: ExplanationBody::Steps(steps),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Steps, when the explanation is step-based
    pub fn step_list(&self) -> Option<&[InteractiveStep]> {
        match &self.body {
            ExplanationBody::Steps(steps) => Some(steps),
            ExplanationBody::Text(_) => None,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_list().map_or(0, |s| s.len())
    }

    /// Flatten to Markdown, used for headless output
    pub fn to_markdown(&self) -> String {
        match &self.body {
            ExplanationBody::Text(text) => text.clone(),
            ExplanationBody::Steps(steps) => steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("## {}. {}\n{}", i + 1, step.title, step.content))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}
