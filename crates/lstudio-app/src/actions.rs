//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use lstudio_core::{Error, RequestKind};
use lstudio_gen::{GenerationError, GenerationService, Generator};

use crate::export;
use crate::message::{GeneratedContent, GenerationJob, GenerationOutcome, Message};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    generator: &Arc<Generator<S>>,
) where
    S: GenerationService + Sync + 'static,
{
    match action {
        UpdateAction::Generate(job) => {
            let generator = Arc::clone(generator);
            tokio::spawn(async move {
                let outcome = run_generation(&generator, &job).await;
                if let Err(e) = report(&msg_tx, Message::GenerationFinished { job, outcome }).await
                {
                    warn!("Dropping generation result: {}", e);
                }
            });
        }

        UpdateAction::Export {
            directory,
            title,
            plan,
        } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    export::write_plan(&directory, &title, &plan)
                })
                .await;

                let result = match result {
                    Ok(Ok(path)) => Ok(path),
                    Ok(Err(e)) => Err(e.to_string()),
                    Err(e) => {
                        error!("Export task panicked: {}", e);
                        Err(e.to_string())
                    }
                };

                if let Err(e) = report(&msg_tx, Message::ExportFinished { result }).await {
                    warn!("Dropping export result: {}", e);
                }
            });
        }
    }
}

/// Hand a background result back to the message loop
pub async fn report(msg_tx: &mpsc::Sender<Message>, message: Message) -> lstudio_core::Result<()> {
    msg_tx
        .send(message)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}

/// Call the generator for `job` and fold the result into an outcome
pub async fn run_generation<S>(generator: &Generator<S>, job: &GenerationJob) -> GenerationOutcome
where
    S: GenerationService + Sync,
{
    let started = Instant::now();

    let result: Result<GeneratedContent, GenerationError> = match job.kind {
        RequestKind::Plan => generator
            .generate_plan(&job.title, job.strategy)
            .await
            .map(GeneratedContent::Plan),
        RequestKind::StrategyExplanation => generator
            .explain_strategy(job.strategy)
            .await
            .map(GeneratedContent::StrategyExplanation),
        RequestKind::LessonExplanation => generator
            .explain_interactively(&job.title, job.strategy)
            .await
            .map(GeneratedContent::LessonExplanation),
    };

    debug!(
        kind = %job.kind,
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "Generation task finished"
    );

    match result {
        Ok(content) => GenerationOutcome::Succeeded(content),
        Err(e) => GenerationOutcome::Failed {
            error: e.to_string(),
        },
    }
}
