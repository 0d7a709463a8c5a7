//! Main update function - handles state transitions (TEA pattern)

use lstudio_core::ViewState;
use tracing::{debug, warn};

use crate::export;
use crate::message::Message;
use crate::state::{AppPhase, AppState, NoticeLevel};

use super::{
    generation, keys::handle_key, navigation, navigation::PAGE_LINES, UpdateAction, UpdateResult,
};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Input
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        Message::Focus(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }

        Message::TitleInput { text } => {
            state.title = text;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Strategy Catalog
        // ─────────────────────────────────────────────────────────
        Message::StrategyCursorUp => {
            state.move_cursor_up();
            UpdateResult::none()
        }

        Message::StrategyCursorDown => {
            state.move_cursor_down();
            UpdateResult::none()
        }

        Message::SelectStrategy { index } => generation::handle_select_strategy(state, index),

        // ─────────────────────────────────────────────────────────
        // View Transitions
        // ─────────────────────────────────────────────────────────
        Message::ExplainStrategy => generation::handle_explain_strategy(state),
        Message::ExplainLesson => generation::handle_explain_lesson(state),

        Message::ShowPlan => {
            if state.can_return_to_plan() {
                state.set_view(ViewState::Plan);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Content Navigation
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => navigation::handle_scroll_up(state, 1),
        Message::ScrollDown => navigation::handle_scroll_down(state, 1),
        Message::PageUp => navigation::handle_scroll_up(state, PAGE_LINES),
        Message::PageDown => navigation::handle_scroll_down(state, PAGE_LINES),
        Message::NextStep => navigation::handle_next_step(state),
        Message::PreviousStep => navigation::handle_previous_step(state),
        Message::SelectStep(index) => navigation::handle_select_step(state, index),

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::Export => {
            let plan = match export::exportable_plan(state).map(str::to_string) {
                Ok(plan) => plan,
                Err(e) => {
                    debug!("{}", e);
                    let text = state.texts().export_unavailable;
                    state.show_notice(text, NoticeLevel::Warning);
                    return UpdateResult::none();
                }
            };

            UpdateResult::action(UpdateAction::Export {
                directory: state.settings.export.directory.clone(),
                title: state.trimmed_title().to_string(),
                plan,
            })
        }

        Message::ExportFinished { result } => {
            match result {
                Ok(path) => {
                    let text = format!("{} {}", state.texts().exported_to, path.display());
                    state.show_notice(text, NoticeLevel::Info);
                }
                Err(e) => {
                    warn!("Export failed: {}", e);
                    let text = state.texts().export_failed;
                    state.show_notice(text, NoticeLevel::Warning);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Background Results
        // ─────────────────────────────────────────────────────────
        Message::GenerationFinished { job, outcome } => {
            generation::handle_generation_finished(state, job, outcome)
        }
    }
}
