//! Generation request handlers
//!
//! Every request goes through `start_request`, which enforces the
//! single-request rule, and every result comes back through
//! `handle_generation_finished`, which always clears the in-flight flag.

use lstudio_core::{InteractiveExplanation, RequestKind, Strategy, TEACHING_STRATEGIES};
use tracing::{debug, info, warn};

use crate::message::{GeneratedContent, GenerationJob, GenerationOutcome};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Select the strategy at `index` and request a plan for it
pub fn handle_select_strategy(state: &mut AppState, index: usize) -> UpdateResult {
    if !state.can_select_strategy() {
        debug!("Strategy selection ignored (blank title or request pending)");
        return UpdateResult::none();
    }

    let Some(strategy) = TEACHING_STRATEGIES.get(index) else {
        warn!("Strategy index {} out of range", index);
        return UpdateResult::none();
    };

    state.strategy_cursor = index;
    state.selected_strategy = Some(strategy);
    state.plan = None;
    state.explanation = None;

    start_request(state, RequestKind::Plan, strategy)
}

pub fn handle_explain_strategy(state: &mut AppState) -> UpdateResult {
    if !state.can_explain_strategy() {
        return UpdateResult::none();
    }
    match state.selected_strategy {
        Some(strategy) => start_request(state, RequestKind::StrategyExplanation, strategy),
        None => UpdateResult::none(),
    }
}

pub fn handle_explain_lesson(state: &mut AppState) -> UpdateResult {
    if !state.can_explain_lesson() {
        return UpdateResult::none();
    }
    match state.selected_strategy {
        Some(strategy) => start_request(state, RequestKind::LessonExplanation, strategy),
        None => UpdateResult::none(),
    }
}

fn start_request(
    state: &mut AppState,
    kind: RequestKind,
    strategy: &'static Strategy,
) -> UpdateResult {
    if state.is_loading() {
        return UpdateResult::none();
    }

    if kind.switches_optimistically() {
        state.set_view(kind.target_view());
    }
    state.begin_request(kind);

    let job = GenerationJob {
        kind,
        title: state.trimmed_title().to_string(),
        strategy,
    };
    info!("Requesting {} for strategy '{}'", kind, strategy.id);

    UpdateResult::action(UpdateAction::Generate(job))
}

/// Apply the result of a background generation call
pub fn handle_generation_finished(
    state: &mut AppState,
    job: GenerationJob,
    outcome: GenerationOutcome,
) -> UpdateResult {
    state.finish_request();

    match outcome {
        GenerationOutcome::Succeeded(content) => {
            debug!("{} ready", job.kind);
            match content {
                GeneratedContent::Plan(plan) => {
                    state.store_plan(plan);
                    state.set_view(job.kind.target_view());
                }
                GeneratedContent::StrategyExplanation(text) => {
                    let name = job.strategy.name(state.language());
                    state.store_explanation(InteractiveExplanation::text(0, name, text));
                }
                GeneratedContent::LessonExplanation(explanation) => {
                    state.store_explanation(explanation);
                }
            }
        }

        GenerationOutcome::Failed { error } => {
            warn!("{} failed: {}", job.kind, error);
            state.error = Some(state.texts().generation_error(job.kind).to_string());
            state.set_view(job.kind.fallback_view());
        }
    }

    UpdateResult::none()
}
