//! Header bar widget
//!
//! Shows the app name, the lesson being worked on, and the actions available
//! for the current view. Actions are hidden while a request is pending.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lstudio_app::AppState;
use lstudio_core::ViewState;

use crate::theme::{icons::IconSet, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    /// `(key, label)` pairs offered in the current view
    pub fn actions(&self) -> Vec<(&'static str, &'static str)> {
        let texts = self.state.texts();
        let mut actions = Vec::new();

        if !self.state.is_loading() {
            match self.state.view {
                ViewState::Plan => {
                    if self.state.can_explain_strategy() {
                        actions.push(("s", texts.explain_strategy_action));
                    }
                    if self.state.can_explain_lesson() {
                        actions.push(("i", texts.explain_lesson_action));
                    }
                    if self.state.can_export() {
                        actions.push(("e", texts.export_action));
                    }
                }
                ViewState::StrategyExplanation | ViewState::LessonExplanation => {
                    actions.push(("b", texts.back_action));
                }
                ViewState::Welcome => {}
            }
        }

        actions.push(("q", texts.quit_action));
        actions
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let language = self.state.language();
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.app(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.state.texts().app_title, styles::accent_bold()),
        ];

        if self.state.has_title() {
            spans.push(Span::styled(" / ", styles::text_muted()));
            spans.push(Span::styled(
                self.state.trimmed_title().to_string(),
                styles::text_primary(),
            ));
        }

        if let Some(strategy) = self.state.selected_strategy {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(self.icons.chevron_right(), styles::text_muted()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(strategy.name(language), styles::text_secondary()));
        }

        spans.push(Span::raw("   "));
        for (key, label) in self.actions() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lstudio_app::config::IconMode;
    use lstudio_core::find_strategy;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_header_shows_app_name_and_title() {
        let mut state = AppState::new();
        state.title = "Water cycle".to_string();

        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(&state, icons()), term.area());

        assert!(term.line_contains(1, "Lesson Studio / Water cycle"));
        assert!(term.line_contains(1, "[q] Quit"));
    }

    #[test]
    fn test_plan_view_offers_explanations_and_export() {
        let mut state = AppState::new();
        state.title = "Water cycle".to_string();
        state.selected_strategy = find_strategy("six-hats");
        state.plan = Some("# Plan".to_string());
        state.set_view(ViewState::Plan);

        let keys: Vec<_> = MainHeader::new(&state, icons())
            .actions()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["s", "i", "e", "q"]);
    }

    #[test]
    fn test_actions_hidden_while_loading() {
        let mut state = AppState::new();
        state.title = "Water cycle".to_string();
        state.selected_strategy = find_strategy("six-hats");
        state.set_view(ViewState::Plan);
        state.begin_request(lstudio_core::RequestKind::StrategyExplanation);

        let keys: Vec<_> = MainHeader::new(&state, icons())
            .actions()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["q"]);
    }

    #[test]
    fn test_explanation_view_offers_back() {
        let mut state = AppState::new();
        state.set_view(ViewState::LessonExplanation);
        let actions = MainHeader::new(&state, icons()).actions();
        assert_eq!(actions[0], ("b", "Back to plan"));
    }
}
