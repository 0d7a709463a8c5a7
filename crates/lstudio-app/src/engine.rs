//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the generator. Both
//! frontends feed it messages and read state (TUI) or events (headless) back.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use lstudio_core::{RequestKind, ViewState};
use lstudio_gen::{GenerationService, Generator};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    view: ViewState,
    in_flight: Option<RequestKind>,
    plan_revision: u64,
    explanation_id: Option<u64>,
    error: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            view: state.view,
            in_flight: state.in_flight.map(|p| p.kind),
            plan_revision: state.plan_revision,
            explanation_id: state.explanation.as_ref().map(|e| e.id),
            error: state.error.clone(),
        }
    }
}

/// Orchestration engine for Lesson Studio.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    generator: Arc<Generator<S>>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: GenerationService + Sync + 'static,
{
    /// Create an engine around `service`.
    ///
    /// Must be called inside a tokio runtime; spawns the signal handler.
    pub fn new(settings: Settings, service: S) -> Self {
        let language = settings.ui.language;
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        signals::spawn_signal_handler(msg_tx.clone());

        let generator = Arc::new(Generator::new(service, language));
        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready (model: {}, language: {})",
            generator.service().model(),
            language
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            generator,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Returns a receiver that gets EngineEvents after each message
    /// processing cycle.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.generator);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn generator(&self) -> &Arc<Generator<S>> {
        &self.generator
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    pub fn shutdown(&mut self) {
        debug!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.view != post.view {
            self.emit(EngineEvent::ViewChanged {
                from: pre.view,
                to: post.view,
            });
        }

        if let (None, Some(kind)) = (pre.in_flight, post.in_flight) {
            self.emit(EngineEvent::RequestStarted { kind });
        }

        if pre.plan_revision != post.plan_revision {
            if let Some(plan) = &self.state.plan {
                self.emit(EngineEvent::PlanReady { plan: plan.clone() });
            }
        }

        if pre.explanation_id != post.explanation_id {
            if let Some(explanation) = &self.state.explanation {
                self.emit(EngineEvent::ExplanationReady {
                    explanation: explanation.clone(),
                });
            }
        }

        if let (Some(kind), Some(message)) = (pre.in_flight, &post.error) {
            if pre.error.as_ref() != Some(message) {
                self.emit(EngineEvent::GenerationFailed {
                    kind,
                    message: message.clone(),
                });
            }
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
