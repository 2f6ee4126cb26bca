//! Event log
//!
//! An append-only, timestamped, line-oriented record of what the server did.
//! The server only needs to hand over a pre-formatted line; where the lines
//! end up is the implementation's business.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Timestamp layout prefixed to every file log entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for tagged event lines such as `[REQUEST]  - verb=GET ...`.
pub trait EventLog: Send + Sync {
    fn write(&self, line: &str);
}

/// Event log backed by a single file.
///
/// The file is truncated once when the log is created. Every entry reopens it
/// in append mode, writes one line and closes it again, so nothing is held
/// open between events.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    /// Creates (or truncates) the log file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        File::create(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        writeln!(file, "{} {}", Local::now().format(TIMESTAMP_FORMAT), line)
    }
}

impl EventLog for FileLog {
    fn write(&self, line: &str) {
        // Losing a log line must never take the server down.
        if let Err(e) = self.append(line) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write event log");
        }
    }
}

/// Event log that keeps every line in memory, without timestamps.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl EventLog for MemoryLog {
    fn write(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
