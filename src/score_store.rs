//! High-score persistence.  The store is a single plain integer; the
//! simulation never touches it, only the session-end code does.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

pub trait HighScoreStore {
    fn read_high_score(&self) -> u32;
    fn write_high_score(&mut self, score: u32) -> io::Result<()>;
}

/// `$HOME/.boss_shooter_score`, or the working directory when `HOME` is unset.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".boss_shooter_score")
}

/// A text file holding the score as a decimal number.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    /// A missing file reads as 0.  So does a garbled one, with a warning.
    fn read_high_score(&self) -> u32 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return 0,
        };
        match text.trim().parse() {
            Ok(score) => score,
            Err(err) => {
                warn!(path = %self.path.display(), "ignoring unreadable high score: {err}");
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u32) -> io::Result<()> {
        std::fs::write(&self.path, score.to_string())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub score: u32,
    pub writes: u32,
}

impl HighScoreStore for MemoryStore {
    fn read_high_score(&self) -> u32 {
        self.score
    }

    fn write_high_score(&mut self, score: u32) -> io::Result<()> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}

/// Session-end bookkeeping: persist `score` if it beats the stored best.
/// Returns whether a new high score was written.
pub fn record_session(store: &mut impl HighScoreStore, score: u32) -> io::Result<bool> {
    if score <= store.read_high_score() {
        return Ok(false);
    }
    store.write_high_score(score)?;
    Ok(true)
}
