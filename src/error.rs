//! Error types for settings storage, batch files and request dispatch
//!
//! The projectors themselves never fail: incomplete input yields no result.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WealthError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl WealthError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WealthError>;
