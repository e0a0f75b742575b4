//! Persisted best score
//!
//! Stored as a single integer in a plain text file. A missing or unreadable
//! file means no high score yet.

use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

/// Default high score file location
pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";

/// Best score across runs
#[derive(Debug, Clone, Default)]
pub struct HighScore {
    best: u64,
    /// Where to persist; `None` keeps the score in memory only
    path: Option<PathBuf>,
}

impl HighScore {
    /// Score kept only for this process
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the stored high score, treating any failure as 0
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read(&path) {
            Ok(best) => {
                log::info!("Loaded high score {best}");
                best
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring high score at {}: {e}", path.display());
                0
            }
        };
        Self {
            best,
            path: Some(path),
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Offer a finished run's score. Returns `Ok(true)` if it became the new
    /// best. The in-memory best is updated even when the write fails.
    pub fn record(&mut self, score: u64) -> Result<bool, PersistenceError> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        if let Some(path) = &self.path {
            std::fs::write(path, score.to_string())?;
            log::info!("High score {score} saved");
        }
        Ok(true)
    }
}

/// Parse a high score file
pub fn read(path: &Path) -> Result<u64, PersistenceError> {
    let text = std::fs::read_to_string(path)?;
    text.trim()
        .parse()
        .map_err(|e| PersistenceError::Parse(format!("{e}")))
}
