//! Strategy catalog list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use lstudio_core::{Language, Strategy};

use crate::theme::{icons::IconSet, styles};

pub struct StrategyList<'a> {
    strategies: &'a [Strategy],
    label: &'a str,
    cursor: usize,
    selected: Option<&'a str>,
    language: Language,
    icons: IconSet,
    focused: bool,
    enabled: bool,
}

impl<'a> StrategyList<'a> {
    pub fn new(strategies: &'a [Strategy], label: &'a str, language: Language, icons: IconSet) -> Self {
        Self {
            strategies,
            label,
            cursor: 0,
            selected: None,
            language,
            icons,
            focused: false,
            enabled: true,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Mark the strategy with this id as the active one
    pub fn selected(mut self, id: Option<&'a str>) -> Self {
        self.selected = id;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Disabled lists are dimmed (blank title or a request in flight)
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn name_style(&self) -> Style {
        if self.enabled {
            styles::text_primary()
        } else {
            styles::text_muted()
        }
    }
}

impl Widget for StrategyList<'_> {
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

        // Reserve room for the description of the highlighted strategy
        let description_height = if self.focused && inner.height >= 8 { 3 } else { 0 };
        let [list_area, description_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(description_height),
        ])
        .areas(inner);

        let items: Vec<ListItem> = self
            .strategies
            .iter()
            .map(|strategy| {
                let active = self.selected == Some(strategy.id);
                let marker = if active { self.icons.check() } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, styles::step_done()),
                    Span::raw(" "),
                    Span::styled(self.icons.catalog(strategy.icon), styles::accent()),
                    Span::raw(" "),
                    Span::styled(strategy.name(self.language), self.name_style()),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        let list = List::new(items).highlight_style(highlight);
        let mut list_state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        if description_height > 0 {
            if let Some(strategy) = self.strategies.get(self.cursor) {
                Paragraph::new(strategy.description(self.language))
                    .style(styles::text_muted())
                    .wrap(Wrap { trim: true })
                    .render(description_area, buf);
            }
        }
    }
}
