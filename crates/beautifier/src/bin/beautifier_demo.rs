//! Demo for the console beautifier.
//!
//! Asks for a theme (or takes `--theme`), then prints one message of each
//! kind, including a structured value, through the patched console.

use std::sync::Arc;

use anyhow::{Context, Result};
use beautifier::{
    apply_theme, args, available_themes, initialize, BeautifierConfig, BeautifierLogger, Console,
    LinePrompt, LogArg, StdTarget, Theme, ThemePrompt, ThemeRegistry,
};
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

/// Show off the minimal, emoji and table console themes
#[derive(Parser)]
#[command(name = "beautifier-demo")]
#[command(version)]
struct Cli {
    /// Use this theme instead of asking
    #[arg(short, long, value_name = "NAME")]
    theme: Option<Theme>,

    /// Print the available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Send the demo messages through the `log` facade
    #[arg(long)]
    via_log: bool,

    /// Ask with a numbered menu instead of the arrow-key selector
    #[arg(long)]
    simple_prompt: bool,
}

#[derive(Debug, Serialize)]
struct Request {
    method: &'static str,
    path: &'static str,
    status: u16,
}

fn prompt_for(cli: &Cli) -> Box<dyn ThemePrompt> {
    if cli.simple_prompt {
        return Box::new(LinePrompt::new());
    }
    interactive_prompt()
}

#[cfg(feature = "input-inquire")]
fn interactive_prompt() -> Box<dyn ThemePrompt> {
    Box::new(beautifier::InquireThemePrompt::new().help("↑↓ to move, enter to select"))
}

#[cfg(not(feature = "input-inquire"))]
fn interactive_prompt() -> Box<dyn ThemePrompt> {
    Box::new(LinePrompt::new())
}

fn run_console(console: &Console) {
    let request = Request {
        method: "GET",
        path: "/health",
        status: 200,
    };

    console.log(&args!["demo started"]);
    console.info(&args!["listening on port", 8080]);
    console.warn(&args!["cache is", 93.5, "percent full"]);
    console.error(&[LogArg::from("request failed:"), LogArg::composite(&request)]);
}

fn run_log(console: Console) -> Result<()> {
    BeautifierLogger::new(console, LevelFilter::Trace)
        .install()
        .context("a logger is already installed")?;

    log::debug!("demo started");
    log::info!("listening on port {}", 8080);
    log::warn!("cache is {} percent full", 93.5);
    log::error!("request failed: GET /health");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for theme in available_themes() {
            println!("{}", theme);
        }
        return Ok(());
    }

    let registry = Arc::new(ThemeRegistry::new());
    match cli.theme {
        Some(theme) => apply_theme(&registry, theme, &StdTarget),
        None => {
            let prompt = prompt_for(&cli);
            initialize(&registry, prompt.as_ref(), &StdTarget)
                .context("could not initialize console")?;
        }
    }

    let console = BeautifierConfig::new().registry(registry).build(StdTarget);

    if cli.via_log {
        run_log(console)
    } else {
        run_console(&console);
        Ok(())
    }
}
