#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use strajk::api::{BookingApi, HttpBookingApi};
use strajk::config::Config;
use strajk::logging;
use strajk::storage::{FileStorage, MemoryStorage, SessionStorage};
use strajk::tui::{App, AppError};

/// Book a bowling lane at Strajk from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Extra configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start on the confirmation screen and show the last stored booking.
    #[arg(long)]
    confirmation: bool,

    /// Keep the session in memory only; nothing is written to disk.
    #[arg(long)]
    ephemeral: bool,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    start(Cli::parse())?;
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn start(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;
    let log_path = logging::init(&config.log)?;
    tracing::info!(log = %log_path.display(), endpoint = %config.api.endpoint, "starting strajk");

    let api = HttpBookingApi::new(&config.api)?;
    let endpoint = api.endpoint().to_string();

    if cli.ephemeral {
        let app = App::new(api, MemoryStorage::new(), endpoint)?;
        return run(app, cli.confirmation);
    }

    let storage = match &config.storage.session_dir {
        Some(dir) => FileStorage::with_path(dir)?,
        None => FileStorage::new()?,
    };
    run(App::new(api, storage, endpoint)?, cli.confirmation)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn run<A: BookingApi, S: SessionStorage>(
    mut app: App<A, S>,
    start_on_confirmation: bool,
) -> Result<(), AppError> {
    if start_on_confirmation {
        app.open_confirmation();
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    result?;
    restore_result?;
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
