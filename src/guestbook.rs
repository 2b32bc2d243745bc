//! Guestbook persistence boundary: one JSON line per submitted entry,
//! appended to a local file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A submitted guestbook entry. `avatar` is the card index the visitor had
/// active at submit time, in `[1, N]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub avatar: usize,
    pub comment: String,
    /// Submission time, milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl Entry {
    pub fn new(name: String, avatar: usize, comment: String) -> Self {
        Self {
            name,
            avatar,
            comment,
            timestamp: now_millis(),
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Append-only JSON-lines store backing the kiosk.
#[derive(Debug)]
pub struct GuestbookStore {
    path: PathBuf,
}

impl GuestbookStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry as a single JSON line, creating the file (and any
    /// missing parent directory) on first write.
    pub fn append(&self, entry: &Entry) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let line = serde_json::to_string(entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }

    /// Reads all entries in submission order. Lines that fail to parse are
    /// skipped rather than failing the whole read, so one corrupt line does
    /// not take the kiosk down.
    pub fn entries(&self) -> io::Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<Entry>(&line) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    pub fn count(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }
}
