//! Loading of actual `.env` files.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines with `dotenvy` and write them into an `Environment`.
//!
//! Does NOT handle:
//! - Verification against template files (see example.rs).
//!
//! Invariants:
//! - Existing variables win over file values; earlier files win over later ones.
//! - Lines `dotenvy` cannot parse (e.g. a bare `FOO` with no `=`) set nothing
//!   and are skipped with a warning.
//! - A quoted value left unterminated (`BAR="oops`) makes `dotenvy` read up to
//!   end of file as one entry, so that entry and every line after it are skipped.
//! - `$NAME` / `${NAME}` substitution is done by `dotenvy` against the process
//!   environment, then earlier lines of the same file. It never consults `env`,
//!   so a `MemoryEnv` agrees with `ProcessEnv` only for referenced names whose
//!   values mirror the process environment.
//! - Log events carry paths, key names and entry positions, never values or raw lines.

use std::path::Path;

use super::env::Environment;
use super::error::LoadError;

/// Load one actual `.env` file into `env`.
pub(crate) fn load_actual_file<E>(path: &Path, env: &mut E) -> Result<(), LoadError>
where
    E: Environment + ?Sized,
{
    let entries = dotenvy::from_path_iter(path).map_err(|e| filesystem_error(path, e))?;

    let mut loaded = 0usize;
    for (index, entry) in entries.enumerate() {
        match entry {
            Ok((key, value)) => {
                if env.set_if_absent(&key, &value) {
                    loaded += 1;
                } else {
                    tracing::debug!(
                        path = %path.display(),
                        key = %key,
                        "Variable already set, keeping existing value"
                    );
                }
            }
            Err(dotenvy::Error::LineParse(_, _)) => {
                tracing::warn!(
                    path = %path.display(),
                    entry = index + 1,
                    "Skipping unparsable line in env file"
                );
            }
            Err(e) => return Err(filesystem_error(path, e)),
        }
    }

    tracing::debug!(path = %path.display(), loaded, "Loaded env file");
    Ok(())
}

fn filesystem_error(path: &Path, err: dotenvy::Error) -> LoadError {
    match err {
        dotenvy::Error::Io(io_err) => LoadError::filesystem(path, io_err),
        other => LoadError::filesystem(path, std::io::Error::other(other)),
    }
}
