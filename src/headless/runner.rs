//! Headless mode runner - engine loop without the TUI
//!
//! Selects the strategy, waits for the plan, optionally asks for an
//! explanation, and stops after the last requested result or the first
//! failure.

use std::io::{self, Write};

use tokio::sync::broadcast;
use tracing::{info, warn};

use lstudio_app::{Engine, EngineEvent, Message};
use lstudio_core::prelude::*;
use lstudio_core::strategy::strategy_index;
use lstudio_core::TEACHING_STRATEGIES;
use lstudio_gen::GenerationService;

use super::HeadlessEvent;

/// Which explanation to request after the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExplainTarget {
    /// Explanation of the strategy itself
    Strategy,
    /// Interactive step-by-step explanation of the lesson
    Lesson,
}

impl ExplainTarget {
    fn message(self) -> Message {
        match self {
            ExplainTarget::Strategy => Message::ExplainStrategy,
            ExplainTarget::Lesson => Message::ExplainLesson,
        }
    }
}

/// What a headless run should produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessRequest {
    pub title: String,
    pub strategy_id: String,
    pub explain: Option<ExplainTarget>,
}

/// Run in headless mode, writing NDJSON events to stdout
pub async fn run_headless<S>(engine: Engine<S>, request: HeadlessRequest) -> Result<()>
where
    S: GenerationService + Sync + 'static,
{
    let mut stdout = io::stdout();
    run_headless_to(engine, request, &mut stdout).await
}

/// Run in headless mode, writing NDJSON events to `out`
pub async fn run_headless_to<S, W>(
    mut engine: Engine<S>,
    request: HeadlessRequest,
    out: &mut W,
) -> Result<()>
where
    S: GenerationService + Sync + 'static,
    W: Write,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Lesson Studio starting in HEADLESS mode");
    info!("Title: {:?}, strategy: {}", request.title, request.strategy_id);
    info!("═══════════════════════════════════════════════════════");

    let title = request.title.trim().to_string();
    if title.is_empty() {
        let err = Error::validation("lesson title must not be blank");
        HeadlessEvent::error(err.to_string(), true).write_to(out);
        return Err(err);
    }

    let Some(index) = strategy_index(&request.strategy_id) else {
        let err = Error::unknown_strategy(&request.strategy_id);
        HeadlessEvent::error(err.to_string(), true).write_to(out);
        return Err(err);
    };

    let mut events = engine.subscribe();
    engine.state.title = title.clone();
    engine.process_message(Message::SelectStrategy { index });

    let strategy_id = TEACHING_STRATEGIES[index].id;
    let result =
        headless_event_loop(&mut engine, &mut events, &request, &title, strategy_id, out).await;

    engine.shutdown();
    info!("Lesson Studio headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop<S, W>(
    engine: &mut Engine<S>,
    events: &mut broadcast::Receiver<EngineEvent>,
    request: &HeadlessRequest,
    title: &str,
    strategy_id: &str,
    out: &mut W,
) -> Result<()>
where
    S: GenerationService + Sync + 'static,
    W: Write,
{
    loop {
        while let Ok(event) = events.try_recv() {
            if let Some(headless) = HeadlessEvent::from_engine(&event, title, strategy_id)
            {
                headless.write_to(out);
            }

            match event {
                EngineEvent::PlanReady { .. } => match request.explain {
                    Some(target) => engine.process_message(target.message()),
                    None => return Ok(()),
                },
                EngineEvent::ExplanationReady { .. } => return Ok(()),
                EngineEvent::GenerationFailed { kind, message } => {
                    warn!("Headless {} request failed", kind);
                    return Err(Error::generation(message));
                }
                _ => {}
            }
        }

        if engine.should_quit() {
            info!("Quit requested");
            return Ok(());
        }

        if !engine.process_next().await {
            warn!("Message channel closed before the run finished");
            let err = Error::ChannelClosed;
            HeadlessEvent::error(err.to_string(), true).write_to(out);
            return Err(err);
        }
    }
}
