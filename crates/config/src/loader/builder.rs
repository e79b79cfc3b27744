//! Load configuration and entry points.
//!
//! Responsibilities:
//! - Provide the `LoadConfig` builder pairing actual and template file lists.
//! - Run the load-then-verify sequence against the process or an injected environment.
//!
//! Does NOT handle:
//! - `.env` syntax (see actual.rs) or template parsing (see example.rs).
//!
//! Invariants / Assumptions:
//! - A category with no explicit files resolves to its built-in default.
//! - Actual files load in order, then templates verify in order.
//! - The first error returned aborts the sequence.

use std::path::{Path, PathBuf};

use super::actual::load_actual_file;
use super::defaults::{resolve_actual_files, resolve_example_files};
use super::env::{Environment, ProcessEnv};
use super::error::LoadError;
use super::example::verify_example_file;

/// Which files to load and which templates to verify against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadConfig {
    actual_files: Vec<PathBuf>,
    example_files: Vec<PathBuf>,
}

impl LoadConfig {
    /// Create a configuration using `.env` and `example.env`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actual `.env` file to load. Replaces the `.env` default.
    pub fn with_actual_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.actual_files.push(path.into());
        self
    }

    /// Add a template file to verify against. Replaces the `example.env` default.
    pub fn with_example_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.example_files.push(path.into());
        self
    }

    /// Add several actual `.env` files, in order.
    pub fn with_actual_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.actual_files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add several template files, in order.
    pub fn with_example_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.example_files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// The actual files that will be loaded, with defaults applied.
    pub fn actual_files(&self) -> Vec<PathBuf> {
        resolve_actual_files(&self.actual_files)
    }

    /// The template files that will be verified, with defaults applied.
    pub fn example_files(&self) -> Vec<PathBuf> {
        resolve_example_files(&self.example_files)
    }
}

/// Load `actual_files` (or `.env` if empty) and verify against `example.env`.
///
/// With no files, name the element type (`load::<&str>(&[])`) or call
/// `load_default`.
///
/// # Errors
///
/// Returns `LoadError::Filesystem` if a file cannot be read, or
/// `LoadError::Validation` for the first required variable that is not set.
pub fn load<P: AsRef<Path>>(actual_files: &[P]) -> Result<(), LoadError> {
    let config = LoadConfig::new().with_actual_files(resolve_actual_files(actual_files));
    load_many(&config)
}

/// Load `.env` and verify against `example.env`.
pub fn load_default() -> Result<(), LoadError> {
    load_many(&LoadConfig::new())
}

/// Load and verify using an explicit configuration, against the process environment.
pub fn load_many(config: &LoadConfig) -> Result<(), LoadError> {
    load_many_into(config, &mut ProcessEnv)
}

/// Load and verify using an explicit configuration, against `env`.
///
/// Substitution inside `.env` values does not read `env`; see `MemoryEnv`.
pub fn load_many_into<E>(config: &LoadConfig, env: &mut E) -> Result<(), LoadError>
where
    E: Environment + ?Sized,
{
    for path in config.actual_files() {
        load_actual_file(&path, env)?;
    }

    for path in config.example_files() {
        verify_example_file(&path, env)?;
    }

    tracing::info!("All required environment variables are set");
    Ok(())
}
