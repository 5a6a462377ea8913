//! Append-only NDJSON storage for game records.
//!
//! Contract: each append writes exactly one JSON object followed by a
//! newline. Reading is lenient; a crashed writer can leave a trailing
//! partial line, which the reader skips.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::record::GameRecordV1;

#[derive(Debug, Error)]
pub enum RecordIoError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer for game records.
pub struct RecordWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl RecordWriter {
    /// Open a file for append, creating it if missing.
    pub fn open_append(path: impl AsRef<Path>) -> Result<RecordWriter, RecordIoError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines = 0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<RecordWriter, RecordIoError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(RecordWriter {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn append(&mut self, record: &GameRecordV1) -> Result<(), RecordIoError> {
        let mut buf = serde_json::to_vec(record)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RecordIoError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every well-formed record line; blank and unparseable lines are
/// skipped.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<GameRecordV1>, RecordIoError> {
    let contents = std::fs::read_to_string(path)?;
    let mut out = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str::<GameRecordV1>(line) {
            out.push(record);
        }
    }
    Ok(out)
}
