use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const RECORDS_FILE_NAME: &str = "records.json";

/// Errors from reading or writing the best-run records file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("records file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("records file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Best results achieved across sessions.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best_score: u32,
    pub best_length: usize,
}

impl BestRecord {
    /// Folds one finished run into the record.
    ///
    /// Returns true when either best improved, signalling the caller to
    /// persist the record.
    pub fn register_run(&mut self, score: u32, length: usize) -> bool {
        let improved = score > self.best_score || length > self.best_length;
        self.best_score = self.best_score.max(score);
        self.best_length = self.best_length.max(length);
        improved
    }
}

/// Returns the platform-correct records file path.
#[must_use]
pub fn records_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(RECORDS_FILE_NAME);
    base
}

/// Loads best-run records from disk.
///
/// A missing file reads as the empty record (first run). A file that exists
/// but cannot be read or parsed is an error, so the caller can surface a
/// warning before entering raw terminal mode.
pub fn load_records() -> Result<BestRecord, ScoreError> {
    load_records_from_path(&records_path())
}

/// Saves best-run records to disk, creating parent directories when needed.
pub fn save_records(record: BestRecord) -> Result<(), ScoreError> {
    save_records_to_path(&records_path(), record)
}

fn load_records_from_path(path: &Path) -> Result<BestRecord, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(BestRecord::default());
        }
        Err(error) => return Err(error.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_records_to_path(path: &Path, record: BestRecord) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&record)?;
    fs::write(path, json)?;
    Ok(())
}
