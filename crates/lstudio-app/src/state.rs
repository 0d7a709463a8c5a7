//! Application state (Model in TEA pattern)

use rand::Rng;

use lstudio_core::{
    render_content, ExplanationBody, InteractiveExplanation, Language, RequestKind, Strategy,
    ViewState, TEACHING_STRATEGIES,
};

use crate::config::Settings;
use crate::locale::{texts, Texts};
use crate::step_viewer::StepViewerState;

/// Loading messages change every this many ticks (about 1.5s at 50ms)
const LOADING_CYCLE_TICKS: u64 = 30;

/// Panel receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Lesson title input
    #[default]
    Title,
    /// Strategy catalog
    Strategies,
    /// Content area (scrolling, step selection)
    Content,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Strategies,
            Focus::Strategies => Focus::Content,
            Focus::Content => Focus::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::Content,
            Focus::Strategies => Focus::Title,
            Focus::Content => Focus::Strategies,
        }
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Transient status-bar message; never touches the view or the error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub remaining_ticks: u32,
}

/// Animated loading indicator shown while a request is in flight
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    messages: &'static [&'static str],
    message_index: usize,
}

impl LoadingState {
    pub fn new(messages: &'static [&'static str]) -> Self {
        // Start at a random index for variety
        let start_index = if messages.is_empty() {
            0
        } else {
            rand::thread_rng().gen_range(0..messages.len())
        };

        Self {
            message: messages.get(start_index).copied().unwrap_or_default().to_string(),
            animation_frame: 0,
            messages,
            message_index: start_index,
        }
    }

    /// Advance the spinner and cycle the message periodically
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if !self.messages.is_empty() && self.animation_frame % LOADING_CYCLE_TICKS == 0 {
            self.message_index = (self.message_index + 1) % self.messages.len();
            self.message = self.messages[self.message_index].to_string();
        }
    }
}

/// The request currently awaiting a result (at most one)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub kind: RequestKind,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub phase: AppPhase,

    /// Which panel the content area shows
    pub view: ViewState,
    pub focus: Focus,

    /// Lesson title as typed (untrimmed)
    pub title: String,
    /// Highlighted row in the strategy list
    pub strategy_cursor: usize,
    pub selected_strategy: Option<&'static Strategy>,

    pub plan: Option<String>,
    /// Bumped each time a new plan is stored
    pub plan_revision: u64,
    pub explanation: Option<InteractiveExplanation>,
    /// At most one user-facing error; cleared when a request starts
    pub error: Option<String>,

    pub in_flight: Option<PendingRequest>,
    pub loading_state: Option<LoadingState>,
    pub notice: Option<Notice>,

    /// First visible content line
    pub content_scroll: u16,
    pub step_viewer: StepViewerState,

    next_explanation_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            phase: AppPhase::Running,
            view: ViewState::Welcome,
            focus: Focus::Title,
            title: String::new(),
            strategy_cursor: 0,
            selected_strategy: None,
            plan: None,
            plan_revision: 0,
            explanation: None,
            error: None,
            in_flight: None,
            loading_state: None,
            notice: None,
            content_scroll: 0,
            step_viewer: StepViewerState::new(),
            next_explanation_id: 1,
        }
    }

    pub fn language(&self) -> Language {
        self.settings.ui.language
    }

    pub fn texts(&self) -> &'static Texts {
        texts(self.language())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Guards
    // ─────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    pub fn has_title(&self) -> bool {
        !self.trimmed_title().is_empty()
    }

    /// Strategy selection (and so a plan request) is possible
    pub fn can_select_strategy(&self) -> bool {
        self.has_title() && !self.is_loading()
    }

    pub fn can_explain_strategy(&self) -> bool {
        self.view == ViewState::Plan && self.selected_strategy.is_some() && !self.is_loading()
    }

    pub fn can_explain_lesson(&self) -> bool {
        self.can_explain_strategy() && self.has_title()
    }

    pub fn can_return_to_plan(&self) -> bool {
        self.view.is_explanation()
    }

    /// Export needs the plan view with a plan in it
    pub fn can_export(&self) -> bool {
        self.view == ViewState::Plan && self.plan.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // View & Request Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Switch view; scroll resets when the view actually changes
    pub fn set_view(&mut self, view: ViewState) {
        if self.view != view {
            self.view = view;
            self.content_scroll = 0;
        }
    }

    /// Mark `kind` as in flight and clear the previous error
    pub fn begin_request(&mut self, kind: RequestKind) {
        self.error = None;
        self.in_flight = Some(PendingRequest { kind });
        self.loading_state = Some(LoadingState::new(self.texts().loading_messages));
    }

    /// Release the in-flight flag, whatever the outcome
    pub fn finish_request(&mut self) -> Option<PendingRequest> {
        self.loading_state = None;
        self.in_flight.take()
    }

    pub fn store_plan(&mut self, plan: String) {
        self.plan = Some(plan);
        self.plan_revision += 1;
        self.content_scroll = 0;
    }

    /// Store a freshly generated explanation under a new identity
    pub fn store_explanation(&mut self, explanation: InteractiveExplanation) {
        let id = self.next_explanation_id;
        self.next_explanation_id += 1;
        let explanation = explanation.with_id(id);
        self.step_viewer.bind(&explanation);
        self.explanation = Some(explanation);
        self.content_scroll = 0;
    }

    /// Text shown in the content area for the current view, if any
    pub fn current_content(&self) -> Option<&str> {
        match self.view {
            ViewState::Welcome => None,
            ViewState::Plan => self.plan.as_deref(),
            ViewState::StrategyExplanation | ViewState::LessonExplanation => {
                match &self.explanation.as_ref()?.body {
                    ExplanationBody::Text(text) => Some(text),
                    ExplanationBody::Steps(steps) => {
                        steps.get(self.step_viewer.active()).map(|s| s.content.as_str())
                    }
                }
            }
        }
    }

    /// Steps of the explanation shown in the lesson view
    pub fn visible_steps(&self) -> Option<&[lstudio_core::InteractiveStep]> {
        if self.view != ViewState::LessonExplanation {
            return None;
        }
        self.explanation.as_ref()?.step_list()
    }

    /// Highest useful scroll offset for the current content
    pub fn max_scroll(&self) -> u16 {
        let lines = self.current_content().map_or(0, |c| render_content(c).len());
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    // ─────────────────────────────────────────────────────────
    // Strategy Cursor
    // ─────────────────────────────────────────────────────────

    pub fn cursor_strategy(&self) -> Option<&'static Strategy> {
        TEACHING_STRATEGIES.get(self.strategy_cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.strategy_cursor = self.strategy_cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.strategy_cursor + 1 < TEACHING_STRATEGIES.len() {
            self.strategy_cursor += 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Notices & Ticks
    // ─────────────────────────────────────────────────────────

    pub fn show_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            remaining_ticks: self.settings.ui.notice_ticks,
        });
    }

    /// Advance animations and expire the notice
    pub fn tick(&mut self) {
        if let Some(loading) = self.loading_state.as_mut() {
            loading.tick();
        }

        if let Some(notice) = self.notice.as_mut() {
            notice.remaining_ticks = notice.remaining_ticks.saturating_sub(1);
            if notice.remaining_ticks == 0 {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lstudio_core::{find_strategy, InteractiveStep, StepIcon};

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.view, ViewState::Welcome);
        assert_eq!(state.focus, Focus::Title);
        assert!(!state.is_loading());
        assert!(state.error.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Title.next(), Focus::Strategies);
        assert_eq!(Focus::Content.next(), Focus::Title);
        assert_eq!(Focus::Title.previous(), Focus::Content);
        assert_eq!(Focus::Strategies.previous(), Focus::Title);
    }

    #[test]
    fn test_whitespace_title_blocks_selection() {
        let mut state = AppState::new();
        state.title = "   ".to_string();
        assert!(!state.can_select_strategy());
        state.title = " Fractions ".to_string();
        assert!(state.can_select_strategy());
        assert_eq!(state.trimmed_title(), "Fractions");
    }

    #[test]
    fn test_begin_and_finish_request() {
        let mut state = AppState::new();
        state.error = Some("old".to_string());

        state.begin_request(RequestKind::Plan);
        assert!(state.is_loading());
        assert!(state.error.is_none());
        assert!(state.loading_state.is_some());
        assert!(!state.can_select_strategy());

        let pending = state.finish_request();
        assert_eq!(pending.map(|p| p.kind), Some(RequestKind::Plan));
        assert!(!state.is_loading());
        assert!(state.loading_state.is_none());
    }

    #[test]
    fn test_set_view_resets_scroll_on_change_only() {
        let mut state = AppState::new();
        state.content_scroll = 5;
        state.set_view(ViewState::Welcome);
        assert_eq!(state.content_scroll, 5);
        state.set_view(ViewState::Plan);
        assert_eq!(state.content_scroll, 0);
    }

    #[test]
    fn test_store_explanation_assigns_fresh_ids() {
        let mut state = AppState::new();
        let exp = InteractiveExplanation::steps(
            0,
            "Six Thinking Hats",
            vec![
                InteractiveStep {
                    title: "a".into(),
                    icon: StepIcon::WhiteHat,
                    content: "one".into(),
                },
                InteractiveStep {
                    title: "b".into(),
                    icon: StepIcon::RedHat,
                    content: "two".into(),
                },
            ],
        );

        state.store_explanation(exp.clone());
        let first_id = state.explanation.as_ref().unwrap().id;
        state.step_viewer.select(1, 2);

        state.store_explanation(exp);
        let second_id = state.explanation.as_ref().unwrap().id;
        assert_ne!(first_id, second_id);
        assert_eq!(state.step_viewer.active(), 0);
    }

    #[test]
    fn test_current_content_follows_view_and_step() {
        let mut state = AppState::new();
        state.plan = Some("# Plan".to_string());
        assert_eq!(state.current_content(), None);

        state.set_view(ViewState::Plan);
        assert_eq!(state.current_content(), Some("# Plan"));

        state.store_explanation(InteractiveExplanation::steps(
            0,
            "x",
            vec![
                InteractiveStep {
                    title: "a".into(),
                    icon: StepIcon::Default,
                    content: "first".into(),
                },
                InteractiveStep {
                    title: "b".into(),
                    icon: StepIcon::Default,
                    content: "second".into(),
                },
            ],
        ));
        state.set_view(ViewState::LessonExplanation);
        assert_eq!(state.current_content(), Some("first"));
        state.step_viewer.select(1, 2);
        assert_eq!(state.current_content(), Some("second"));
        assert_eq!(state.visible_steps().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_guards_depend_on_view() {
        let mut state = AppState::new();
        state.title = "Fractions".to_string();
        state.selected_strategy = find_strategy("brainstorming");
        assert!(!state.can_explain_strategy());

        state.set_view(ViewState::Plan);
        assert!(state.can_explain_strategy());
        assert!(state.can_explain_lesson());
        assert!(!state.can_export());

        state.plan = Some("plan".to_string());
        assert!(state.can_export());

        state.begin_request(RequestKind::StrategyExplanation);
        assert!(!state.can_explain_strategy());
    }

    #[test]
    fn test_cursor_stays_in_catalog() {
        let mut state = AppState::new();
        state.move_cursor_up();
        assert_eq!(state.strategy_cursor, 0);
        for _ in 0..100 {
            state.move_cursor_down();
        }
        assert_eq!(state.strategy_cursor, TEACHING_STRATEGIES.len() - 1);
    }

    #[test]
    fn test_notice_expires_after_ticks() {
        let mut state = AppState::new();
        state.settings.ui.notice_ticks = 2;
        state.show_notice("saved", NoticeLevel::Info);
        state.tick();
        assert!(state.notice.is_some());
        state.tick();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_loading_state_cycles_messages() {
        let messages: &'static [&'static str] = &["a", "b", "c"];
        let mut loading = LoadingState::new(messages);
        let initial = loading.message.clone();
        for _ in 0..LOADING_CYCLE_TICKS - 1 {
            loading.tick();
        }
        assert_eq!(loading.message, initial);
        loading.tick();
        assert_ne!(loading.message, initial);
    }

    #[test]
    fn test_loading_state_with_no_messages() {
        let mut loading = LoadingState::new(&[]);
        assert_eq!(loading.message, "");
        loading.tick();
        assert_eq!(loading.animation_frame, 1);
    }
}
