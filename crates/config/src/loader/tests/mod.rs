//! Tests for the load-then-verify sequence.
//!
//! Responsibilities:
//! - Exercise `load` and `load_many` end to end against the process environment.
//! - Exercise `load_many_into` against an in-memory environment.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd use `serial_test` and `env_lock()`.
//! - Files live in `tempfile` directories and are cleaned up automatically.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Acquire the env lock, recovering it if a previous test panicked while holding it.
pub fn lock_env() -> MutexGuard<'static, ()> {
    env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}
