//! Content scrolling and step navigation handlers

use crate::state::AppState;

use super::UpdateResult;

/// Lines moved by PageUp/PageDown
pub const PAGE_LINES: u16 = 10;

pub fn handle_scroll_up(state: &mut AppState, lines: u16) -> UpdateResult {
    state.content_scroll = state.content_scroll.saturating_sub(lines);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState, lines: u16) -> UpdateResult {
    let max = state.max_scroll();
    state.content_scroll = state.content_scroll.saturating_add(lines).min(max);
    UpdateResult::none()
}

/// Move within the lesson explanation's steps using `mv`
fn move_step(
    state: &mut AppState,
    mv: impl FnOnce(&mut crate::step_viewer::StepViewerState, usize) -> bool,
) -> UpdateResult {
    let Some(count) = state.visible_steps().map(<[_]>::len) else {
        return UpdateResult::none();
    };

    if mv(&mut state.step_viewer, count) {
        state.content_scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_next_step(state: &mut AppState) -> UpdateResult {
    move_step(state, |viewer, count| viewer.next(count))
}

pub fn handle_previous_step(state: &mut AppState) -> UpdateResult {
    move_step(state, |viewer, count| viewer.previous(count))
}

pub fn handle_select_step(state: &mut AppState, index: usize) -> UpdateResult {
    move_step(state, |viewer, count| viewer.select(index, count))
}
