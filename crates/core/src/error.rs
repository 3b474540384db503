//! Error types for glyphtrim operations.

use std::{path::PathBuf, result};

/// Every way a subsetting run can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("font subsetting engine unavailable: {0}")]
    MissingEngine(String),

    #[error("font file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported font format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid font file {}: {reason}", path.display())]
    InvalidFont { path: PathBuf, reason: String },

    #[error("font subsetting failed: {0}")]
    SubsetFailure(String),
}

impl Error {
    pub(crate) fn invalid_font(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::InvalidFont { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = result::Result<T, Error>;
