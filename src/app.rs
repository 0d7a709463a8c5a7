//! Application startup shared by the TUI and headless modes

use std::path::PathBuf;

use lstudio_app::config::{self, Settings};
use lstudio_app::{Engine, Focus, Message};
use lstudio_core::prelude::*;
use lstudio_core::strategy::strategy_index;
use lstudio_core::Language;
use lstudio_gen::{GeminiClient, GeminiConfig};

use crate::headless::{self, ExplainTarget, HeadlessRequest};

/// Everything the command line can set
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub title: Option<String>,
    pub strategy: Option<String>,
    pub model: Option<String>,
    pub language: Option<Language>,
    pub headless: bool,
    pub explain: Option<ExplainTarget>,
}

impl LaunchOptions {
    /// Apply command-line overrides on top of the loaded settings
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(model) = &self.model {
            settings.generation.model = model.clone();
        }
        if let Some(language) = self.language {
            settings.ui.language = language;
        }
    }
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns the terminal)
    lstudio_core::logging::init()?;

    let mut settings = config::load_settings(options.config_path.as_deref());
    options.apply_to(&mut settings);
    info!(
        "Settings: model={}, language={}, icons={}",
        settings.generation.model, settings.ui.language, settings.ui.icons
    );

    // Missing credential is reported before the terminal is touched
    let api_key = config::resolve_api_key(&settings.generation)?;
    let client = GeminiClient::new(gemini_config(&settings, api_key))?;

    let result = if options.headless {
        let engine = Engine::new(settings, client);
        headless::run_headless(
            engine,
            HeadlessRequest {
                title: options.title.clone().unwrap_or_default(),
                strategy_id: options.strategy.clone().unwrap_or_default(),
                explain: options.explain,
            },
        )
        .await
    } else {
        let preset = preset_strategy(options.strategy.as_deref())?;
        let mut engine = Engine::new(settings, client);
        apply_presets(&mut engine, options.title.as_deref(), preset);
        lstudio_tui::run(engine).await
    };

    if let Err(ref e) = result {
        log_exit_error(e);
    }

    info!("Lesson Studio exiting");
    result
}

fn log_exit_error(e: &Error) {
    if e.is_fatal() {
        error!("Fatal error: {:?}", e);
    } else if e.is_recoverable() {
        warn!("Run ended on a recoverable error: {:?}", e);
    } else {
        error!("Application error: {:?}", e);
    }
}

fn gemini_config(settings: &Settings, api_key: String) -> GeminiConfig {
    GeminiConfig {
        api_key,
        model: settings.generation.model.clone(),
        endpoint: settings.generation.endpoint.clone(),
        temperature: settings.generation.temperature,
        timeout_secs: settings.generation.timeout_secs,
    }
}

/// Catalog index of `--strategy`, validated before the terminal starts
fn preset_strategy(id: Option<&str>) -> Result<Option<usize>> {
    match id {
        Some(id) => strategy_index(id)
            .map(Some)
            .ok_or_else(|| Error::unknown_strategy(id)),
        None => Ok(None),
    }
}

/// Prefill the title and strategy; with both set the plan is requested at once
fn apply_presets<S>(engine: &mut Engine<S>, title: Option<&str>, strategy: Option<usize>)
where
    S: lstudio_gen::GenerationService + Sync + 'static,
{
    if let Some(title) = title {
        engine.state.title = title.to_string();
    }

    if let Some(index) = strategy {
        engine.state.strategy_cursor = index;
        engine.state.focus = Focus::Strategies;
        if engine.state.has_title() {
            engine.process_message(Message::SelectStrategy { index });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lstudio_core::ViewState;
    use lstudio_gen::test_utils::ScriptedService;

    #[test]
    fn test_overrides_replace_settings() {
        let options = LaunchOptions {
            model: Some("gemini-2.5-pro".to_string()),
            language: Some(Language::Arabic),
            ..Default::default()
        };
        let mut settings = Settings::default();
        options.apply_to(&mut settings);

        assert_eq!(settings.generation.model, "gemini-2.5-pro");
        assert_eq!(settings.ui.language, Language::Arabic);
    }

    #[test]
    fn test_no_overrides_keep_settings() {
        let mut settings = Settings::default();
        LaunchOptions::default().apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_preset_strategy_validation() {
        assert_eq!(preset_strategy(None).unwrap(), None);
        assert_eq!(preset_strategy(Some("six-hats")).unwrap(), Some(1));
        assert!(matches!(
            preset_strategy(Some("storytelling")),
            Err(Error::UnknownStrategy { .. })
        ));
    }

    #[tokio::test]
    async fn test_presets_with_title_start_plan_request() {
        let mut engine = Engine::new(Settings::default(), ScriptedService::new().with_reply("# Plan"));
        apply_presets(&mut engine, Some("Water cycle"), Some(2));

        assert_eq!(engine.state.strategy_cursor, 2);
        assert_eq!(engine.state.focus, Focus::Strategies);
        assert!(engine.state.is_loading());

        assert!(engine.process_next().await);
        assert_eq!(engine.state.view, ViewState::Plan);
    }

    #[tokio::test]
    async fn test_strategy_preset_without_title_only_moves_cursor() {
        let mut engine = Engine::new(Settings::default(), ScriptedService::new());
        apply_presets(&mut engine, None, Some(4));

        assert_eq!(engine.state.strategy_cursor, 4);
        assert!(!engine.state.is_loading());
        assert_eq!(engine.state.view, ViewState::Welcome);
    }
}
