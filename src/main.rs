//! Lesson Studio - a terminal lesson planner
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use lesson_studio::{ExplainTarget, LaunchOptions};
use lstudio_app::config;
use lstudio_core::prelude::*;
use lstudio_core::Language;

/// Lesson Studio - generate lesson plans from a title and a teaching strategy
#[derive(Parser, Debug)]
#[command(name = "lstudio")]
#[command(about = "A terminal lesson planner backed by a generative model", long_about = None)]
struct Args {
    /// Lesson title to start with
    #[arg(long)]
    title: Option<String>,

    /// Teaching strategy id (e.g. six-hats, brainstorming)
    #[arg(long, value_name = "ID")]
    strategy: Option<String>,

    /// Model name, overriding the config file
    #[arg(long)]
    model: Option<String>,

    /// Output language: en or ar
    #[arg(long, value_parser = parse_language)]
    language: Option<Language>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI); needs --title and --strategy
    #[arg(long)]
    headless: bool,

    /// Explanation to request after the plan (headless mode)
    #[arg(long, value_enum, requires = "headless")]
    explain: Option<ExplainTarget>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_language(value: &str) -> std::result::Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unsupported language '{}' (use en or ar)", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("no config directory on this platform; pass --config"))?;
        let path = config::init_config_file(&path)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    lesson_studio::run(LaunchOptions {
        config_path: args.config,
        title: args.title,
        strategy: args.strategy,
        model: args.model,
        language: args.language,
        headless: args.headless,
        explain: args.explain,
    })
    .await
}
