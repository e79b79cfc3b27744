//! Default file resolution.
//!
//! Responsibilities:
//! - Substitute the built-in file name when a caller supplies no files.
//!
//! Does NOT handle:
//! - Checking whether the resolved files exist (see `actual.rs`, `example.rs`).
//!
//! Invariants:
//! - A non-empty caller list is returned unchanged, in order.
//! - An empty list resolves to exactly one default: `.env` or `example.env`.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ACTUAL_FILE, DEFAULT_EXAMPLE_FILE};

fn resolve_or<P: AsRef<Path>>(files: &[P], default: &str) -> Vec<PathBuf> {
    if files.is_empty() {
        vec![PathBuf::from(default)]
    } else {
        files.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

/// Resolve the actual `.env` files to load, defaulting to `.env`.
pub fn resolve_actual_files<P: AsRef<Path>>(files: &[P]) -> Vec<PathBuf> {
    resolve_or(files, DEFAULT_ACTUAL_FILE)
}

/// Resolve the template files to verify against, defaulting to `example.env`.
pub fn resolve_example_files<P: AsRef<Path>>(files: &[P]) -> Vec<PathBuf> {
    resolve_or(files, DEFAULT_EXAMPLE_FILE)
}
