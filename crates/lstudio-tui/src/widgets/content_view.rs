//! Rendered lesson content
//!
//! Turns [`ContentBlock`]s into styled lines. Scrolling is by block, so the
//! offset kept in `AppState` maps one-to-one onto what is skipped here.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use lstudio_core::ContentBlock;

use crate::theme::styles;

/// Styled line for one content block
pub fn block_line(block: &ContentBlock) -> Line<'static> {
    match block {
        ContentBlock::Heading { level, text } => {
            Line::from(Span::styled(text.clone(), styles::heading(*level)))
        }
        ContentBlock::Emphasis { text } => Line::from(Span::styled(text.clone(), styles::emphasis())),
        ContentBlock::BulletItem { text } => Line::from(vec![
            Span::styled("  \u{2022} ", styles::bullet()),
            Span::styled(text.clone(), styles::text_primary()),
        ]),
        ContentBlock::NumberedItem { number, text } => Line::from(vec![
            Span::styled(format!("  {}. ", number), styles::number()),
            Span::styled(text.clone(), styles::text_primary()),
        ]),
        ContentBlock::Paragraph { text } => {
            Line::from(Span::styled(text.clone(), styles::text_secondary()))
        }
    }
}

pub struct ContentView<'a> {
    blocks: &'a [ContentBlock],
    scroll: usize,
    block: Option<Block<'a>>,
    alignment: Alignment,
}

impl<'a> ContentView<'a> {
    pub fn new(blocks: &'a [ContentBlock]) -> Self {
        Self {
            blocks,
            scroll: 0,
            block: None,
            alignment: Alignment::Left,
        }
    }

    /// Skip the first `scroll` blocks
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = usize::from(scroll);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.blocks.iter().skip(self.scroll).map(block_line).collect();

        let mut paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .alignment(self.alignment);
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use insta::assert_snapshot;
    use lstudio_core::render_content;

    fn rendered(text: &str, scroll: u16) -> Vec<String> {
        let blocks = render_content(text);
        let mut term = TestTerminal::with_size(30, 6);
        term.render_widget(ContentView::new(&blocks).scroll(scroll), term.area());
        (0..6).map(|y| term.line_text(y).trim_end().to_string()).collect()
    }

    #[test]
    fn test_markup_is_replaced_by_styling() {
        let lines = rendered("## Goals\n* observe\n1. predict\n**Note**\nplain", 0);
        assert_snapshot!(lines[..5].join("\n"), @r"
        Goals
          • observe
          1. predict
        Note
        plain
        ");
    }

    #[test]
    fn test_scroll_skips_blocks() {
        let lines = rendered("# One\n# Two\n# Three", 1);
        assert_eq!(lines[0], "Two");
        assert_eq!(lines[1], "Three");
    }

    #[test]
    fn test_heading_style() {
        let line = block_line(&ContentBlock::Heading {
            level: 2,
            text: "Title".to_string(),
        });
        assert_eq!(line.spans[0].style, styles::heading(2));
        assert_eq!(line.spans[0].content, "Title");
    }
}
