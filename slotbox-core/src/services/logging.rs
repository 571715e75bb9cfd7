//! Logging service - structured event logging to a JSONL file
//!
//! Privacy-safe by construction: events carry command names and error
//! text only. Usernames, passwords, amounts, and balances are never
//! logged. Designed so a logging failure can never break the game.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

const LOG_FILE: &str = "events.jsonl";

/// Counter for generating unique ids within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique id based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            error_message: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error_message = Some(error.into());
        self
    }
}

/// One serialized line in the event log
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogRecord {
    id: u64,
    ts: DateTime<Utc>,
    platform: String,
    entry_point: EntryPoint,
    app_version: String,
    #[serde(flatten)]
    event: LogEvent,
}

/// Append-only event logger
pub struct LoggingService {
    log_path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
}

impl LoggingService {
    pub fn new(data_dir: &Path, entry_point: EntryPoint, app_version: &str) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            log_path: data_dir.join(LOG_FILE),
            entry_point,
            app_version: app_version.to_string(),
        })
    }

    /// Record one event as a JSON line
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let record = LogRecord {
            id: generate_id(),
            ts: Utc::now(),
            platform: detect_platform().to_string(),
            entry_point: self.entry_point,
            app_version: self.app_version.clone(),
            event,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", serde_json::to_string(&record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_appends_json_lines() {
        let temp = TempDir::new().unwrap();
        let logger = LoggingService::new(temp.path(), EntryPoint::Cli, "0.1.0").unwrap();

        logger.log(LogEvent::new("session_started")).unwrap();
        logger
            .log(LogEvent::new("command_failed").with_command("bet").with_error("no funds"))
            .unwrap();

        let content = std::fs::read_to_string(temp.path().join(LOG_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "session_started");
        assert_eq!(first["entry_point"], "cli");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["command"], "bet");
        assert_eq!(second["error_message"], "no funds");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }
}
