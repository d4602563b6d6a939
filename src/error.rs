// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A top-level page landmark is missing: the markup no longer matches the
    /// layout this scraper expects (stale layout, blocked request, other locale).
    #[error("page layout mismatch: {landmark} not found")]
    Structure { landmark: String },

    #[error("duplicate stat key in snapshot: {0}")]
    DuplicateKey(String),

    #[error("layout catalog: {0}")]
    Catalog(String),

    #[error("output path {}: {reason}", path.display())]
    OutputPath { path: PathBuf, reason: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn missing(landmark: impl Into<String>) -> Self {
        ScrapeError::Structure { landmark: landmark.into() }
    }

    /// True for errors that mean "the page is not what we think it is".
    pub fn is_structural(&self) -> bool {
        matches!(self, ScrapeError::Structure { .. })
    }
}
