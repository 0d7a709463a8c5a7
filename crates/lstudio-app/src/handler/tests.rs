//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::{GeneratedContent, GenerationOutcome, Message};
use crate::state::{AppPhase, AppState, Focus, NoticeLevel};
use lstudio_core::{
    find_strategy, strategy::strategy_index, ExplanationBody, InteractiveExplanation,
    InteractiveStep, RequestKind, StepIcon, ViewState,
};

fn state_with_title(title: &str) -> AppState {
    let mut state = AppState::new();
    state.title = title.to_string();
    state
}

fn index_of(id: &str) -> usize {
    strategy_index(id).expect("strategy exists")
}

/// Run a message and return the job it started, if any
fn start(state: &mut AppState, message: Message) -> Option<GenerationJob> {
    match update(state, message).action {
        Some(UpdateAction::Generate(job)) => Some(job),
        _ => None,
    }
}

fn finish(state: &mut AppState, job: GenerationJob, outcome: GenerationOutcome) {
    update(state, Message::GenerationFinished { job, outcome });
}

fn fail(state: &mut AppState, job: GenerationJob) {
    finish(
        state,
        job,
        GenerationOutcome::Failed {
            error: "boom".to_string(),
        },
    );
}

/// A state showing a generated plan for `strategy_id`
fn state_with_plan(strategy_id: &str) -> AppState {
    let mut state = state_with_title("Water cycle");
    let job = start(
        &mut state,
        Message::SelectStrategy {
            index: index_of(strategy_id),
        },
    )
    .expect("plan request starts");
    finish(
        &mut state,
        job,
        GenerationOutcome::Succeeded(GeneratedContent::Plan("# Plan\n\n* warm-up".to_string())),
    );
    state
}

fn six_steps() -> InteractiveExplanation {
    let steps = [
        StepIcon::WhiteHat,
        StepIcon::RedHat,
        StepIcon::BlackHat,
        StepIcon::YellowHat,
        StepIcon::GreenHat,
        StepIcon::BlueHat,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, icon)| InteractiveStep {
        title: format!("Hat {}", i + 1),
        icon,
        content: format!("Line one\nLine two of hat {}", i + 1),
    })
    .collect();
    InteractiveExplanation::steps(0, "Six Thinking Hats", steps)
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message_in_any_focus() {
    let mut state = AppState::new();
    for focus in [Focus::Title, Focus::Strategies, Focus::Content] {
        state.focus = focus;
        let result = handle_key(&state, InputKey::CharCtrl('c'));
        assert!(matches!(result, Some(Message::Quit)));
    }
}

#[test]
fn test_q_types_into_title_but_quits_elsewhere() {
    let mut state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::TitleInput { ref text }) if text == "q"));

    state.focus = Focus::Strategies;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Title Input & Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_key_message_is_routed_to_title() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('F')));
    let follow_up = result.message.expect("follow-up message");
    update(&mut state, follow_up);
    assert_eq!(state.title, "F");
}

#[test]
fn test_backspace_and_clear_title() {
    let mut state = state_with_title("abc");
    assert!(matches!(
        handle_key(&state, InputKey::Backspace),
        Some(Message::TitleInput { ref text }) if text == "ab"
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('u')),
        Some(Message::TitleInput { ref text }) if text.is_empty()
    ));

    state.title.clear();
    assert!(handle_key(&state, InputKey::Backspace).is_none());
}

#[test]
fn test_enter_in_title_moves_to_strategies() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Focus(Focus::Strategies))
    ));
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Strategies);
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Content);
    update(&mut state, Message::FocusPrevious);
    assert_eq!(state.focus, Focus::Strategies);
}

#[test]
fn test_strategy_list_keys() {
    let mut state = AppState::new();
    state.focus = Focus::Strategies;
    state.strategy_cursor = 4;

    assert!(matches!(
        handle_key(&state, InputKey::Char('j')),
        Some(Message::StrategyCursorDown)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Up),
        Some(Message::StrategyCursorUp)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SelectStrategy { index: 4 })
    ));
}

#[test]
fn test_digit_keys_select_steps_in_content() {
    let mut state = AppState::new();
    state.focus = Focus::Content;
    assert!(matches!(
        handle_key(&state, InputKey::Char('4')),
        Some(Message::SelectStep(3))
    ));
    assert!(handle_key(&state, InputKey::Char('0')).is_none());
}

// ─────────────────────────────────────────────────────────
// Strategy Selection / Plan Requests
// ─────────────────────────────────────────────────────────

#[test]
fn test_select_strategy_with_blank_title_is_noop() {
    for title in ["", "   ", "\t\n"] {
        let mut state = state_with_title(title);
        let job = start(&mut state, Message::SelectStrategy { index: 0 });
        assert!(job.is_none());
        assert!(!state.is_loading());
        assert!(state.selected_strategy.is_none());
        assert_eq!(state.view, ViewState::Welcome);
    }
}

#[test]
fn test_select_strategy_starts_plan_request() {
    let mut state = state_with_title("  Water cycle ");
    state.error = Some("previous".to_string());

    let job = start(
        &mut state,
        Message::SelectStrategy {
            index: index_of("six-hats"),
        },
    )
    .expect("plan request");

    assert_eq!(job.kind, RequestKind::Plan);
    assert_eq!(job.title, "Water cycle");
    assert_eq!(job.strategy.id, "six-hats");
    assert!(state.is_loading());
    assert!(state.error.is_none());
    // Plan requests keep the current view until they succeed
    assert_eq!(state.view, ViewState::Welcome);
}

#[test]
fn test_second_request_while_pending_is_noop() {
    let mut state = state_with_title("Water cycle");
    assert!(start(&mut state, Message::SelectStrategy { index: 0 }).is_some());
    assert!(start(&mut state, Message::SelectStrategy { index: 1 }).is_none());
    assert_eq!(state.selected_strategy.map(|s| s.id), Some("reciprocal-teaching"));
}

#[test]
fn test_out_of_range_strategy_index_is_ignored() {
    let mut state = state_with_title("Water cycle");
    assert!(start(&mut state, Message::SelectStrategy { index: 999 }).is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_plan_success_switches_to_plan_view() {
    let state = state_with_plan("six-hats");
    assert_eq!(state.view, ViewState::Plan);
    assert!(!state.is_loading());
    assert_eq!(state.plan.as_deref(), Some("# Plan\n\n* warm-up"));
    assert_eq!(state.plan_revision, 1);
}

#[test]
fn test_plan_failure_falls_back_to_welcome() {
    let mut state = state_with_title("Water cycle");
    let job = start(&mut state, Message::SelectStrategy { index: 0 }).unwrap();

    fail(&mut state, job);

    assert!(!state.is_loading());
    assert_eq!(state.view, ViewState::Welcome);
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred while generating the plan. Please try again.")
    );
}

#[test]
fn test_new_selection_clears_previous_content() {
    let mut state = state_with_plan("six-hats");
    state.explanation = Some(six_steps());

    let job = start(
        &mut state,
        Message::SelectStrategy {
            index: index_of("brainstorming"),
        },
    );

    assert!(job.is_some());
    assert!(state.plan.is_none());
    assert!(state.explanation.is_none());
    assert_eq!(state.selected_strategy.map(|s| s.id), Some("brainstorming"));
}

// ─────────────────────────────────────────────────────────
// Explanation Requests
// ─────────────────────────────────────────────────────────

#[test]
fn test_explain_strategy_switches_view_optimistically() {
    let mut state = state_with_plan("brainstorming");

    let job = start(&mut state, Message::ExplainStrategy).expect("explanation request");

    assert_eq!(job.kind, RequestKind::StrategyExplanation);
    assert_eq!(state.view, ViewState::StrategyExplanation);
    assert!(state.is_loading());
}

#[test]
fn test_explain_strategy_requires_plan_view() {
    let mut state = state_with_title("Water cycle");
    state.selected_strategy = find_strategy("brainstorming");
    assert!(start(&mut state, Message::ExplainStrategy).is_none());
    assert_eq!(state.view, ViewState::Welcome);
}

#[test]
fn test_explain_strategy_success_stores_text_explanation() {
    let mut state = state_with_plan("brainstorming");
    let job = start(&mut state, Message::ExplainStrategy).unwrap();

    finish(
        &mut state,
        job,
        GenerationOutcome::Succeeded(GeneratedContent::StrategyExplanation(
            "## What it is\nIdeas first.".to_string(),
        )),
    );

    let explanation = state.explanation.as_ref().expect("explanation stored");
    assert!(matches!(explanation.body, ExplanationBody::Text(_)));
    assert_eq!(explanation.strategy, "Brainstorming");
    assert_eq!(state.view, ViewState::StrategyExplanation);
    assert!(state.error.is_none());
}

#[test]
fn test_explain_strategy_failure_returns_to_plan() {
    let mut state = state_with_plan("brainstorming");
    let job = start(&mut state, Message::ExplainStrategy).unwrap();

    fail(&mut state, job);

    assert!(!state.is_loading());
    assert_eq!(state.view, ViewState::Plan);
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred while explaining the strategy.")
    );
    // The plan survives a failed explanation
    assert!(state.plan.is_some());
}

#[test]
fn test_explain_lesson_failure_returns_to_plan() {
    let mut state = state_with_plan("six-hats");
    let job = start(&mut state, Message::ExplainLesson).unwrap();
    assert_eq!(state.view, ViewState::LessonExplanation);

    fail(&mut state, job);

    assert_eq!(state.view, ViewState::Plan);
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred while creating the interactive explanation.")
    );
}

#[test]
fn test_error_cleared_by_next_request() {
    let mut state = state_with_plan("six-hats");
    let job = start(&mut state, Message::ExplainLesson).unwrap();
    fail(&mut state, job);
    assert!(state.error.is_some());

    start(&mut state, Message::ExplainStrategy).unwrap();
    assert!(state.error.is_none());
}

#[test]
fn test_late_result_after_navigating_back_keeps_plan_view() {
    let mut state = state_with_plan("six-hats");
    let job = start(&mut state, Message::ExplainLesson).unwrap();

    update(&mut state, Message::ShowPlan);
    assert_eq!(state.view, ViewState::Plan);

    finish(
        &mut state,
        job,
        GenerationOutcome::Succeeded(GeneratedContent::LessonExplanation(six_steps())),
    );

    assert_eq!(state.view, ViewState::Plan);
    assert!(!state.is_loading());
    assert_eq!(state.explanation.as_ref().map(|e| e.step_count()), Some(6));
}

#[test]
fn test_arabic_errors_are_localized() {
    let mut state = state_with_title("دورة الماء");
    state.settings.ui.language = lstudio_core::Language::Arabic;
    let job = start(&mut state, Message::SelectStrategy { index: 0 }).unwrap();

    fail(&mut state, job);

    assert_eq!(
        state.error.as_deref(),
        Some("حدث خطأ أثناء إنشاء الخطة. يرجى المحاولة مرة أخرى.")
    );
}

// ─────────────────────────────────────────────────────────
// Step Viewer
// ─────────────────────────────────────────────────────────

fn state_with_lesson_explanation() -> AppState {
    let mut state = state_with_plan("six-hats");
    let job = start(&mut state, Message::ExplainLesson).unwrap();
    finish(
        &mut state,
        job,
        GenerationOutcome::Succeeded(GeneratedContent::LessonExplanation(six_steps())),
    );
    state
}

#[test]
fn test_step_navigation() {
    let mut state = state_with_lesson_explanation();
    assert_eq!(state.step_viewer.active(), 0);

    update(&mut state, Message::SelectStep(3));
    assert_eq!(state.step_viewer.active(), 3);

    update(&mut state, Message::NextStep);
    assert_eq!(state.step_viewer.active(), 4);

    update(&mut state, Message::PreviousStep);
    update(&mut state, Message::PreviousStep);
    assert_eq!(state.step_viewer.active(), 2);

    // Beyond the last step is ignored
    update(&mut state, Message::SelectStep(6));
    assert_eq!(state.step_viewer.active(), 2);
}

#[test]
fn test_new_explanation_resets_active_step() {
    let mut state = state_with_lesson_explanation();
    update(&mut state, Message::SelectStep(3));

    update(&mut state, Message::ShowPlan);
    let job = start(&mut state, Message::ExplainLesson).unwrap();
    finish(
        &mut state,
        job,
        GenerationOutcome::Succeeded(GeneratedContent::LessonExplanation(six_steps())),
    );

    assert_eq!(state.step_viewer.active(), 0);
}

#[test]
fn test_step_change_resets_scroll() {
    let mut state = state_with_lesson_explanation();
    update(&mut state, Message::ScrollDown);
    assert_eq!(state.content_scroll, 1);

    update(&mut state, Message::NextStep);
    assert_eq!(state.content_scroll, 0);
}

#[test]
fn test_step_messages_ignored_outside_lesson_view() {
    let mut state = state_with_plan("six-hats");
    state.explanation = Some(six_steps());
    update(&mut state, Message::SelectStep(2));
    assert_eq!(state.step_viewer.active(), 0);
}

// ─────────────────────────────────────────────────────────
// Scrolling & View Transitions
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut state = state_with_plan("six-hats");
    // "# Plan", "", "* warm-up" -> three blocks
    for _ in 0..10 {
        update(&mut state, Message::ScrollDown);
    }
    assert_eq!(state.content_scroll, 2);

    update(&mut state, Message::PageUp);
    assert_eq!(state.content_scroll, 0);
}

#[test]
fn test_show_plan_only_from_explanations() {
    let mut state = state_with_title("Water cycle");
    update(&mut state, Message::ShowPlan);
    assert_eq!(state.view, ViewState::Welcome);
}

#[test]
fn test_view_change_resets_scroll() {
    let mut state = state_with_lesson_explanation();
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::ShowPlan);
    assert_eq!(state.content_scroll, 0);
}

// ─────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────

#[test]
fn test_export_outside_plan_view_is_a_notice() {
    let mut state = state_with_lesson_explanation();
    state.set_view(ViewState::LessonExplanation);

    let result = update(&mut state, Message::Export);

    assert!(result.action.is_none());
    let notice = state.notice.as_ref().expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.text, "Export is only available for the lesson plan.");
    // Not an application error and no view change
    assert!(state.error.is_none());
    assert_eq!(state.view, ViewState::LessonExplanation);
}

#[test]
fn test_export_from_plan_view_returns_action() {
    let mut state = state_with_plan("six-hats");

    let result = update(&mut state, Message::Export);

    match result.action {
        Some(UpdateAction::Export {
            directory,
            title,
            plan,
        }) => {
            assert_eq!(directory, std::path::PathBuf::from("."));
            assert_eq!(title, "Water cycle");
            assert_eq!(plan, "# Plan\n\n* warm-up");
        }
        other => panic!("expected export action, got {:?}", other),
    }
}

#[test]
fn test_export_finished_shows_notice() {
    let mut state = state_with_plan("six-hats");

    update(
        &mut state,
        Message::ExportFinished {
            result: Ok("plans/Water_cycle.md".into()),
        },
    );
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.text.ends_with("plans/Water_cycle.md"));

    update(
        &mut state,
        Message::ExportFinished {
            result: Err("disk full".to_string()),
        },
    );
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Warning);
    assert!(state.error.is_none());
}

#[test]
fn test_tick_advances_loading() {
    let mut state = state_with_title("Water cycle");
    start(&mut state, Message::SelectStrategy { index: 0 }).unwrap();
    update(&mut state, Message::Tick);
    assert_eq!(state.loading_state.as_ref().unwrap().animation_frame, 1);
}
