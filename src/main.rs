//! kask - Taproom Terminal Dashboard
//!
//! Shows what is on tap at a Kask-backed taproom: beer details, how full
//! each keg is, and brewery artwork drawn in characters.
//!
//! ## Usage
//!
//! ```bash
//! # Start the dashboard against the default API
//! kask
//!
//! # Point at another Kask server
//! kask --kask-url http://localhost:5000/api
//!
//! # With verbose logging
//! kask -v
//!
//! # With custom log directory
//! kask --log-dir /path/to/logs/
//! ```

use std::io::Write;
use std::panic;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kask_api::{ApiError, ClientConfig, DEFAULT_BASE_URL, KaskClient, Taproom};
use kask_core::{KaskError, LogGuard, init_logging};
use kask_tui::App;
use tracing::{error, info, warn};

/// Kask Taproom Dashboard
///
/// Fetches the taps and the kegs on them once, then lets you flip through
/// the active beers.
#[derive(Parser, Debug)]
#[command(name = "kask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the Kask API
    #[arg(long = "kask-url", alias = "kaskurl", default_value = DEFAULT_BASE_URL)]
    kask_url: String,

    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.kask/logs/)
    #[arg(long)]
    log_dir: Option<std::path::PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging. Without a usable log directory the dashboard
    // still runs, just unlogged.
    let _guard = match setup_logging(&cli) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            if let Some(hint) = e.guidance() {
                eprintln!("{}", hint);
            }
            if e.is_fatal() {
                return ExitCode::from(1);
            }
            None
        }
    };

    // Install panic hook to ensure terminal cleanup
    install_panic_hook();

    info!(url = %cli.kask_url, "Starting kask dashboard");

    match run(&cli) {
        Ok(()) => {
            info!("kask dashboard exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let network = e
                .downcast_ref::<ApiError>()
                .is_some_and(ApiError::is_network_error);
            error!(network, "kask dashboard error: {:#}", e);
            eprintln!("Error: {}", user_message(&e));
            ExitCode::from(1)
        }
    }
}

/// Fetch the taproom, then hand the active kegs to the dashboard.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let kegs = match load_taproom(&cli.kask_url)? {
        Taproom::Open(kegs) => kegs,
        closed => {
            let notice = closed.closed_notice().unwrap_or_default();
            warn!(notice, "nothing to show");
            println!("{}", notice);
            return Ok(());
        }
    };

    let mut app = App::new(kegs)?;
    app.run().map_err(dashboard_error)
}

/// Convert a dashboard failure, keeping [`KaskError`]s intact so their
/// guidance can be shown.
fn dashboard_error(e: Box<dyn std::error::Error>) -> anyhow::Error {
    match e.downcast::<KaskError>() {
        Ok(kask) => anyhow::Error::new(*kask),
        Err(other) => anyhow::anyhow!("{}", other),
    }
}

/// Run every fetch up front on a single-threaded runtime.
fn load_taproom(base_url: &str) -> anyhow::Result<Taproom> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = KaskClient::new(ClientConfig::default().with_base_url(base_url))?;

    let taproom = runtime.block_on(client.fetch_taproom())?;
    Ok(taproom)
}

/// Text shown on stderr for a startup failure.
fn user_message(e: &anyhow::Error) -> String {
    if let Some(api) = e.downcast_ref::<ApiError>() {
        return api.friendly_message();
    }
    if let Some(hint) = e.downcast_ref::<KaskError>().and_then(KaskError::guidance) {
        return format!("{} ({})", e, hint);
    }
    format!("{:#}", e)
}

/// Install a panic hook that restores the terminal before printing the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore terminal state
        let _ = restore_terminal();

        original_hook(panic_info);
    }));
}

/// Restore terminal to its normal state.
fn restore_terminal() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();

    crossterm::execute!(
        stdout,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;

    stdout.flush()
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> kask_core::Result<LogGuard> {
    init_logging(cli.log_dir.clone(), cli.verbose > 0)
}
