//! Status bar: the current notice, or key hints for the focused panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lstudio_app::{AppState, Focus, NoticeLevel};

use crate::theme::{icons::IconSet, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.focus {
            Focus::Title => &[("Enter", "strategies"), ("Tab", "next panel"), ("Ctrl+C", "quit")],
            Focus::Strategies => &[("\u{2191}\u{2193}", "move"), ("Enter", "select"), ("Tab", "next panel")],
            Focus::Content => &[
                ("\u{2191}\u{2193}", "scroll"),
                ("\u{2190}\u{2192}", "steps"),
                ("1-9", "jump"),
                ("Tab", "next panel"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(notice) = &self.state.notice {
            let icon = match notice.level {
                NoticeLevel::Info => self.icons.info(),
                NoticeLevel::Warning => self.icons.alert(),
            };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(icon, styles::notice(notice.level)),
                Span::raw(" "),
                Span::styled(notice.text.as_str(), styles::notice(notice.level)),
            ])
        } else {
            let mut spans = vec![Span::raw(" ")];
            for (key, label) in self.hints() {
                spans.push(Span::styled(*key, styles::keybinding()));
                spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use insta::assert_snapshot;
    use lstudio_app::config::IconMode;

    fn render(state: &AppState) -> String {
        let mut term = TestTerminal::with_size(70, 1);
        term.render_widget(StatusBar::new(state, IconSet::new(IconMode::Unicode)), term.area());
        term.line_text(0).trim_end().to_string()
    }

    #[test]
    fn test_title_hints() {
        let state = AppState::new();
        assert_snapshot!(render(&state), @" Enter strategies  Tab next panel  Ctrl+C quit");
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut state = AppState::new();
        state.show_notice("Export is only available for the lesson plan.", NoticeLevel::Warning);
        assert_snapshot!(render(&state), @" ⚠ Export is only available for the lesson plan.");
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::new();
        state.focus = Focus::Content;
        assert!(render(&state).contains("1-9 jump"));
    }
}
