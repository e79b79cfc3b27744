//! Template (`example.env`) parsing and verification.
//!
//! Responsibilities:
//! - Extract required variable names from template file contents.
//! - Check each name against an `Environment`, stopping at the first missing one.
//!
//! Invariants:
//! - Contents are split on `\n` only; empty lines are skipped.
//! - A name is the text before the first `=`, or the whole line if there is none.
//! - Names are not trimmed or otherwise validated.

use std::path::Path;

use super::env::Environment;
use super::error::LoadError;

/// Iterate the required variable names declared in template `contents`, in order.
pub fn required_keys(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.split_once('=').map_or(line, |(key, _)| key))
}

/// Read a template file and return its required variable names.
///
/// # Errors
///
/// Returns `LoadError::Filesystem` if the file cannot be opened or read.
pub fn read_required_keys(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let contents = read_template(path)?;
    Ok(required_keys(&contents).map(str::to_string).collect())
}

fn read_template(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::filesystem(path, e))
}

/// Verify that every name declared in the template at `path` is set in `env`.
pub(crate) fn verify_example_file<E>(path: &Path, env: &E) -> Result<(), LoadError>
where
    E: Environment + ?Sized,
{
    let contents = read_template(path)?;

    let mut checked = 0usize;
    for key in required_keys(&contents) {
        if !env.contains(key) {
            tracing::debug!(path = %path.display(), key, "Required variable is not set");
            return Err(LoadError::missing(key));
        }
        checked += 1;
    }

    tracing::debug!(path = %path.display(), checked, "Verified template file");
    Ok(())
}
