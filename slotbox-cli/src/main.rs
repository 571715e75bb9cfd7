//! Slotbox CLI - slot machine wagering in your terminal

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use slotbox_core::services::{EntryPoint, LogEvent, LoggingService, PROMPT, WELCOME};
use slotbox_core::SlotboxContext;

mod output;

/// Slotbox - signup, deposit, and bet against the slot game
#[derive(Parser)]
#[command(name = "slotbox", version, about, long_about = None)]
struct Cli {
    /// Data directory (defaults to $SLOTBOX_DIR, then ~/.slotbox)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

/// Get the slotbox data directory from flag, environment, or default
fn get_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("SLOTBOX_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(".slotbox")
}

/// Get the logging service for CLI operations
///
/// Returns None when logging is disabled or fails to initialize;
/// logging must never block the game.
fn get_logger(data_dir: &Path, enabled: bool) -> Option<LoggingService> {
    if !enabled {
        return None;
    }
    LoggingService::new(data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors
fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = get_data_dir(&cli);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {data_dir:?}"))?;

    let mut ctx = SlotboxContext::new(&data_dir)
        .with_context(|| format!("Failed to start slotbox from {data_dir:?}"))?;
    let logger = get_logger(&data_dir, ctx.config.logging);
    log_event(&logger, LogEvent::new("session_started"));

    output::info(WELCOME);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{PROMPT}");

        // EOF ends the session like an explicit exit
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let reply = ctx.session.dispatch(&line);
        println!("{}", reply.message);

        let command = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        log_event(&logger, LogEvent::new("command_dispatched").with_command(command));

        if reply.halt {
            break;
        }
    }

    log_event(&logger, LogEvent::new("session_ended"));
    Ok(())
}
