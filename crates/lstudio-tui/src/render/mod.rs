//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::Frame;

use lstudio_app::{AppState, Focus};
use lstudio_core::{render_content, Language, ViewState};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: nothing in `state` changes here.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());
    let icons = IconSet::new(state.settings.ui.icons);
    let texts = state.texts();

    frame.render_widget(widgets::MainHeader::new(state, icons), areas.header);

    frame.render_widget(
        widgets::LessonInput::new(texts.title_label, &state.title, texts.title_placeholder)
            .focused(state.focus == Focus::Title),
        areas.title_input,
    );

    frame.render_widget(
        widgets::StrategyList::new(
            lstudio_core::TEACHING_STRATEGIES,
            texts.strategies_label,
            state.language(),
            icons,
        )
        .cursor(state.strategy_cursor)
        .selected(state.selected_strategy.map(|s| s.id))
        .focused(state.focus == Focus::Strategies)
        .enabled(state.can_select_strategy()),
        areas.strategies,
    );

    render_content_panel(frame, areas.content, state, icons);

    frame.render_widget(widgets::StatusBar::new(state, icons), areas.status);
}

/// Content area: loading, then error, then content, then the welcome message
fn render_content_panel(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let focused = state.focus == Focus::Content;

    if let Some(loading) = &state.loading_state {
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(widgets::LoadingPanel::new(loading), inner);
        return;
    }

    if let Some(error) = &state.error {
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(widgets::ErrorPanel::new(error, icons), inner);
        return;
    }

    let Some(content) = state.current_content() else {
        let texts = state.texts();
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            widgets::WelcomePanel::new(texts.welcome_heading, texts.welcome_body, icons),
            inner,
        );
        return;
    };

    let alignment = match state.language() {
        Language::Arabic => Alignment::Right,
        Language::English => Alignment::Left,
    };

    let body_area = match state.visible_steps() {
        Some(steps) if !steps.is_empty() => {
            let (timeline_area, body_area) = layout::split_steps(area, steps.len());
            let strategy = state
                .explanation
                .as_ref()
                .map_or("", |e| e.strategy.as_str());
            frame.render_widget(
                widgets::StepTimeline::new(steps, state.step_viewer.active(), icons)
                    .title(strategy),
                timeline_area,
            );
            body_area
        }
        _ => area,
    };

    let blocks = render_content(content);
    let block = styles::glass_block(focused).title(Span::styled(
        format!(" {} ", panel_title(state)),
        styles::accent_bold(),
    ));
    frame.render_widget(
        widgets::ContentView::new(&blocks)
            .scroll(state.content_scroll)
            .block(block)
            .alignment(alignment),
        body_area,
    );
}

/// Title of the content panel for the current view
fn panel_title(state: &AppState) -> String {
    let texts = state.texts();
    match state.view {
        ViewState::Welcome => String::new(),
        ViewState::Plan => texts.plan_heading.to_string(),
        ViewState::StrategyExplanation => match &state.explanation {
            Some(explanation) => format!("{}: {}", texts.explanation_heading, explanation.strategy),
            None => texts.explanation_heading.to_string(),
        },
        ViewState::LessonExplanation => {
            let active = state.step_viewer.active();
            state
                .visible_steps()
                .and_then(|steps| steps.get(active))
                .map_or_else(
                    || texts.explanation_heading.to_string(),
                    |step| format!("{}. {}", active + 1, step.title),
                )
        }
    }
}
