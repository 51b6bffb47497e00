use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;

/// Best score kept as a bare decimal integer in a flat file.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the best score. A missing or unreadable file, or content that
    /// is not an integer, counts as 0.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|e| {
                warn!(
                    "ignoring malformed best score in {}: {}",
                    self.path.display(),
                    e
                );
                0
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("error loading best score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrites the file with `score`.
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        info!("resetting best score");
        self.save(0)
    }
}
