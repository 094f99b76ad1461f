//! Append-only score history.
//!
//! The history store is the only state that outlives a single analysis run.
//! It is an explicit object handed to the pipeline, never ambient state, so
//! tests can run against [`MemoryHistoryStore`] without filesystem side
//! effects. Appends require `&mut self`; callers that share a store across
//! concurrent runs must serialize access to keep indices gap-free.

use crate::error::{OrateError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of the persisted CSV table.
const CSV_HEADER: &str = "session,score";

/// One persisted analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based run index.
    pub index: u32,
    /// Composite score of that run.
    pub score: u8,
}

/// Append-only store of past composite scores.
pub trait HistoryStore: Send {
    /// Append one score, returning its 1-based sequence index.
    fn append(&mut self, score: u8) -> Result<u32>;

    /// All entries in append order. An absent or empty store yields an
    /// empty sequence, not an error.
    fn load_all(&self) -> Result<Vec<HistoryEntry>>;
}

/// In-memory store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, score: u8) -> Result<u32> {
        let index = self.entries.len() as u32 + 1;
        self.entries.push(HistoryEntry { index, score });
        Ok(index)
    }

    fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}

/// CSV-backed store: a two-column plain-text table (`session,score`) that
/// external tools can read and append to.
///
/// The file is created with a header on first append; rows are
/// stream-appended afterwards, never rewritten.
#[derive(Debug)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_row(line: &str, line_no: usize) -> Result<HistoryEntry> {
        let mut fields = line.split(',');
        let index = fields.next().map(str::trim).unwrap_or_default();
        let score = fields.next().map(str::trim);

        let (Ok(index), Some(Ok(score))) = (index.parse::<u32>(), score.map(str::parse::<u8>))
        else {
            return Err(OrateError::History {
                message: format!("malformed row at line {}: {:?}", line_no, line),
            });
        };

        Ok(HistoryEntry { index, score })
    }

    fn read_entries(&self) -> Result<Vec<HistoryEntry>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // Absent store: first run starts from empty history
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line == CSV_HEADER {
                continue;
            }
            entries.push(Self::parse_row(line, line_no + 1)?);
        }
        Ok(entries)
    }
}

impl HistoryStore for CsvHistoryStore {
    fn append(&mut self, score: u8) -> Result<u32> {
        let existing = self.read_entries()?;
        let index = existing.len() as u32 + 1;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if existing.is_empty() && file.metadata()?.len() == 0 {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        writeln!(file, "{},{}", index, score)?;

        Ok(index)
    }

    fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        self.read_entries()
    }
}
