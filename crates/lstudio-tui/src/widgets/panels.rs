//! Content-area placeholders: loading indicator, error and welcome message

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use lstudio_app::LoadingState;

use crate::theme::{icons::IconSet, styles};

/// Braille spinner characters for smooth animation
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(animation_frame: u64) -> &'static str {
    SPINNER[(animation_frame % SPINNER.len() as u64) as usize]
}

/// Vertically center `height` rows inside `area`
fn centered(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

pub struct LoadingPanel<'a> {
    loading: &'a LoadingState,
}

impl<'a> LoadingPanel<'a> {
    pub fn new(loading: &'a LoadingState) -> Self {
        Self { loading }
    }
}

impl Widget for LoadingPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(spinner_frame(self.loading.animation_frame), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.loading.message.as_str(), styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered(area, 1), buf);
    }
}

pub struct ErrorPanel<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.icons.alert(), styles::error()),
            Span::raw(" "),
            Span::styled(self.message, styles::error()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered(area, 3), buf);
    }
}

pub struct WelcomePanel<'a> {
    heading: &'a str,
    body: &'a str,
    icons: IconSet,
}

impl<'a> WelcomePanel<'a> {
    pub fn new(heading: &'a str, body: &'a str, icons: IconSet) -> Self {
        Self {
            heading,
            body,
            icons,
        }
    }
}

impl Widget for WelcomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(self.icons.app(), styles::accent()),
                Span::raw(" "),
                Span::styled(self.heading, styles::accent_bold()),
            ]),
            Line::default(),
            Line::from(Span::styled(self.body, styles::text_secondary())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered(area, 6), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lstudio_app::config::IconMode;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(1), "⠙");
        assert_eq!(spinner_frame(SPINNER.len() as u64), "⠋");
    }

    #[test]
    fn test_loading_panel_shows_message() {
        let loading = LoadingState::new(&["Arranging the desks..."]);
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(LoadingPanel::new(&loading), term.area());
        assert!(term.buffer_contains("⠋ Arranging the desks..."));
    }

    #[test]
    fn test_error_panel() {
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(
            ErrorPanel::new("Something failed.", IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(term.buffer_contains("⚠ Something failed."));
    }

    #[test]
    fn test_welcome_panel() {
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(
            WelcomePanel::new("Ready to create?", "Type a title.", IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(term.buffer_contains("Ready to create?"));
        assert!(term.buffer_contains("Type a title."));
    }
}
