//! Optional JSONL log of session events.
//!
//! One line per event: `start` when a game begins, `lock` for every merged
//! piece and `game_over` at the end.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionRecord {
    Start {
        episode_id: u32,
        seed: u32,
    },
    Lock {
        episode_id: u32,
        lines_cleared: u32,
        line_clear_score: u32,
        score: u32,
        lines: u32,
        level: u32,
    },
    GameOver {
        episode_id: u32,
        score: u32,
        lines: u32,
        level: u32,
    },
}

impl SessionRecord {
    pub fn lock(episode_id: u32, event: &LockEvent) -> Self {
        Self::Lock {
            episode_id,
            lines_cleared: event.lines_cleared,
            line_clear_score: event.line_clear_score,
            score: event.score,
            lines: event.lines,
            level: event.level,
        }
    }
}

/// Append-only writer; a disabled log swallows every record.
///
/// The first write failure disables the log and is kept for the caller.
pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
    failure: Option<anyhow::Error>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
            failure: None,
        })
    }

    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &SessionRecord) {
        if let Err(e) = self.try_record(record) {
            self.file = None;
            self.failure = Some(e);
        }
    }

    /// Error that disabled the log, if any.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    pub fn try_record(&mut self, record: &SessionRecord) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        file.write_all(&self.buf)?;
        Ok(())
    }
}
