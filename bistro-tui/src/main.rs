//! bistro-tui - Terminal UI for Bistro
//!
//! Restaurant greeting screen plus a list/detail browser for meals fetched
//! from TheMealDB.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use libbistro::service::MealService;
use libbistro::Config;

use bistro_tui::{
    app::{event::EventHandler, reduce, Action, AppState, UiConfig},
    services::{outcome_action, FetchOutcome, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "bistro-tui")]
#[command(version, about = "Restaurant greeting and meal browser for the terminal")]
struct Args {
    /// Path to config file (defaults to $BISTRO_CONFIG or ~/.config/bistro/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Search term for TheMealDB (overrides [api].search)
    #[arg(short, long, value_name = "TERM", conflicts_with = "mock")]
    search: Option<String>,

    /// Serve built-in sample meals instead of calling TheMealDB
    #[arg(long)]
    mock: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load_or_default()?,
    };

    init_logging(args.verbose)?;

    let services = if args.mock {
        ServiceHandle::new(MealService::mock())?
    } else {
        ServiceHandle::from_config(&config, args.search)?
    };
    tracing::info!(provider = services.provider_name(), "Starting bistro-tui");

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services, UiConfig::from_config(&config.ui));

    restore_terminal(terminal)?;

    result
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(verbose: bool) -> Result<()> {
    let mut logging = libbistro::logging::config_from_env();
    logging.verbose = verbose;
    if logging.file.is_none() {
        let data_dir = libbistro::config::resolve_data_path()?;
        logging = logging.with_file(data_dir.join("bistro-tui.log"));
    }
    logging.init().context("Failed to open log file")
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle, config: UiConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.tick_rate_ms);
    let mut state = AppState::with_config(config);

    // At most one fetch in flight
    let mut fetch_rx: Option<Receiver<FetchOutcome>> = None;

    loop {
        // Spawn a fetch the reducer asked for
        if state.wants_fetch() {
            fetch_rx = Some(services.refresh());
            state = reduce(state, Action::FetchStarted);
        }

        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        // Deliver a finished fetch as one action
        if let Some(ref rx) = fetch_rx {
            match rx.try_recv() {
                Ok(outcome) => {
                    if let Err(ref e) = outcome {
                        tracing::warn!(error = %e, "Keeping previous meals");
                    }
                    state = reduce(state, outcome_action(outcome));
                    fetch_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    state = reduce(state, Action::FetchFailed("fetch task ended".to_string()));
                    fetch_rx = None;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
