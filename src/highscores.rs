//! Best-run record, persisted under ~/.skyhopper/.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const HIGHSCORES_FILE: &str = "highscores.json";

/// Lifetime best plus a run counter. Missing or corrupt files load as the
/// default (no best yet).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighScores {
    /// Best whole-pair score across all runs.
    pub best: u32,
    /// Unix timestamp of when `best` was set. 0 until a first run completes.
    pub recorded_at: i64,
    /// Total finished runs.
    pub runs: u64,
}

impl HighScores {
    /// Load the record, falling back to the default when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = match Self::save_file() {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };
        match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Fold one finished run into the record. Returns true when `score` set
    /// a new best.
    pub fn record(&mut self, score: u32, now: i64) -> bool {
        self.runs += 1;
        if score > self.best {
            self.best = score;
            self.recorded_at = now;
            true
        } else {
            false
        }
    }

    /// Save the record as pretty-printed JSON.
    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(Self::save_file()?, json)?;
        Ok(())
    }

    /// Path of the record inside ~/.skyhopper/, creating the directory if
    /// needed.
    fn save_file() -> io::Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let dir = home_dir.join(".skyhopper");
        fs::create_dir_all(&dir)?;
        Ok(dir.join(HIGHSCORES_FILE))
    }
}
