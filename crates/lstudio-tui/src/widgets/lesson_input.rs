//! Lesson title input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const CURSOR: &str = "\u{258f}"; // ▏

pub struct LessonInput<'a> {
    label: &'a str,
    text: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> LessonInput<'a> {
    pub fn new(label: &'a str, text: &'a str, placeholder: &'a str) -> Self {
        Self {
            label,
            text,
            placeholder,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// The longest suffix of `text` that fits in `width` columns
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for LessonInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.label),
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.text.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder, styles::text_muted()))
        } else {
            // Keep the end of the title (where typing happens) in view
            let room = usize::from(inner.width).saturating_sub(2);
            let mut spans = vec![Span::styled(
                visible_tail(self.text, room).to_string(),
                styles::text_primary(),
            )];
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(inner, buf);
    }
}
