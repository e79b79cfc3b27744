//! Shared test utilities for dotenv-safe integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temp directory.
//! - Write env and template files for a test scenario.
//!
//! Invariants / Assumptions:
//! - Commands run with the temp directory as cwd, so default file names resolve there.
//! - Host `DOTENV_SAFE_*` and `RUST_LOG` settings never leak into a test.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Variable names used by the scenarios; cleared so host values cannot satisfy a template.
pub const SCENARIO_KEYS: [&str; 3] = ["FOO", "BAZ", "WUT"];

/// Returns a hermetic `dotenv-safe` command running inside `dir`.
pub fn dotenv_safe_cmd(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotenv-safe");
    cmd.current_dir(dir.path());

    cmd.env_remove("DOTENV_SAFE_ENV")
        .env_remove("DOTENV_SAFE_EXAMPLE")
        .env_remove("RUST_LOG");
    for key in SCENARIO_KEYS {
        cmd.env_remove(key);
    }

    cmd
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}
