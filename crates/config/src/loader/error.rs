//! Error types for environment loading and verification.
//!
//! Responsibilities:
//! - Define the two failure kinds: unreadable files and missing variables.
//! - Render messages in the `open <path>: <reason>` and
//!   `Env variable <key> is not set` shapes that callers match on.
//!
//! Invariants:
//! - Errors never include values read from `.env` files, only paths and key names.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or verifying the environment.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An actual or template file could not be opened or read.
    #[error("open {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A variable named in a template file is absent from the environment.
    #[error("Env variable {key} is not set")]
    Validation { key: String },
}

impl LoadError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing(key: impl Into<String>) -> Self {
        LoadError::Validation { key: key.into() }
    }

    /// The file that failed to load, for filesystem errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::Filesystem { path, .. } => Some(path),
            LoadError::Validation { .. } => None,
        }
    }

    /// The first required variable found missing, for validation errors.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            LoadError::Validation { key } => Some(key),
            LoadError::Filesystem { .. } => None,
        }
    }
}
