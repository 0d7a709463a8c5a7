//! Main TUI runner - terminal lifecycle and event loop

use lstudio_app::Engine;
use lstudio_core::{Error, Result};
use lstudio_gen::GenerationService;
use tracing::info;

use crate::{event, render, terminal};

/// Run the interactive interface until the user quits.
///
/// The engine must already be configured (settings, credential, any
/// preset title or strategy); terminal setup happens here.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: GenerationService + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| {
        ratatui::restore();
        init_error(e)
    })?;
    info!("Terminal initialized");

    let result = run_loop(&mut term, &mut engine).await;

    engine.shutdown();
    ratatui::restore();
    info!("Terminal restored");

    result
}

fn init_error(e: std::io::Error) -> Error {
    Error::TerminalInit(e.to_string())
}

async fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: GenerationService + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from background tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }

        // Terminal polling blocks; let spawned generation tasks run
        tokio::task::yield_now().await;
    }

    Ok(())
}
