//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width on wide terminals
pub const SIDEBAR_WIDTH: u16 = 36;

/// Below this width the sidebar stacks above the content
pub const MIN_SIDE_BY_SIDE_WIDTH: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub title_input: Rect,
    pub strategies: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(6),    // Sidebar + content
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    let (sidebar, content) = if area.width >= MIN_SIDE_BY_SIDE_WIDTH {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .areas(body);
        (sidebar, content)
    } else {
        let [sidebar, content] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(4)]).areas(body);
        (sidebar, content)
    };

    let [title_input, strategies] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(sidebar);

    ScreenAreas {
        header,
        title_input,
        strategies,
        content,
        status,
    }
}

/// Split the lesson explanation area into the step timeline and the step body
pub fn split_steps(area: Rect, step_count: usize) -> (Rect, Rect) {
    // One row per step plus borders, capped so the body keeps most of the space
    let wanted = u16::try_from(step_count).unwrap_or(u16::MAX).saturating_add(2);
    let timeline_height = wanted.min(area.height / 2).max(3);
    let [timeline, body] =
        Layout::vertical([Constraint::Length(timeline_height), Constraint::Min(3)]).areas(area);
    (timeline, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_places_sidebar_left() {
        let areas = create(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.title_input.width, SIDEBAR_WIDTH);
        assert_eq!(areas.content.x, SIDEBAR_WIDTH);
        assert_eq!(areas.content.width, 100 - SIDEBAR_WIDTH);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let areas = create(Rect::new(0, 0, 50, 30));
        assert_eq!(areas.title_input.width, 50);
        assert_eq!(areas.content.width, 50);
        assert!(areas.content.y > areas.strategies.y);
    }

    #[test]
    fn test_split_steps_caps_timeline() {
        let (timeline, body) = split_steps(Rect::new(0, 0, 60, 20), 6);
        assert_eq!(timeline.height, 8);
        assert_eq!(body.height, 12);

        let (timeline, _) = split_steps(Rect::new(0, 0, 60, 10), 9);
        assert_eq!(timeline.height, 5);
    }
}
