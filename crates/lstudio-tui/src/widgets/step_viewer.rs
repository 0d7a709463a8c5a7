//! Step timeline for interactive explanations

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use lstudio_core::InteractiveStep;

use crate::theme::{icons::IconSet, styles};

/// Vertical timeline: finished steps are checked, the active one highlighted
pub struct StepTimeline<'a> {
    steps: &'a [InteractiveStep],
    active: usize,
    icons: IconSet,
    title: &'a str,
}

impl<'a> StepTimeline<'a> {
    pub fn new(steps: &'a [InteractiveStep], active: usize, icons: IconSet) -> Self {
        Self {
            steps,
            active,
            icons,
            title: "",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn step_line(&self, index: usize, step: &'a InteractiveStep) -> Line<'a> {
        let (marker, marker_style, title_style) = if index < self.active {
            (self.icons.check().to_string(), styles::step_done(), styles::text_secondary())
        } else if index == self.active {
            (format!("{}", index + 1), styles::step_active(), styles::step_active())
        } else {
            (format!("{}", index + 1), styles::step_pending(), styles::step_pending())
        };

        Line::from(vec![
            Span::styled(format!(" {:>2} ", marker), marker_style),
            Span::styled(self.icons.step(step.icon), styles::step_icon(step.icon)),
            Span::raw(" "),
            Span::styled(step.title.as_str(), title_style),
        ])
    }
}

impl Widget for StepTimeline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(false);
        if !self.title.is_empty() {
            block = block.title(Span::styled(format!(" {} ", self.title), styles::accent_bold()));
        }

        let items: Vec<ListItem> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| ListItem::new(self.step_line(i, step)))
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.active));
        StatefulWidget::render(List::new(items).block(block), area, buf, &mut list_state);
    }
}
