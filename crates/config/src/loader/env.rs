//! Environment access for loading and verification.
//!
//! Responsibilities:
//! - Define the `Environment` capability the loader reads and writes through.
//! - Provide the process-backed implementation and an in-memory one.
//!
//! Does NOT handle:
//! - Parsing `.env` files (see actual.rs).
//!
//! Invariants:
//! - `set_if_absent` never replaces an existing value, even an empty one.
//! - A variable set to the empty string counts as present.

use std::collections::HashMap;

/// Minimal view of an environment variable store.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value` unless `key` is already set.
    ///
    /// Returns `true` if the value was written.
    fn set_if_absent(&mut self, key: &str, value: &str) -> bool;

    /// Returns whether `key` is set, regardless of its value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_key(key) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if !is_valid_key(key) || std::env::var_os(key).is_some() {
            return false;
        }
        // SAFETY: loading runs once at startup, before other threads read the
        // environment. Concurrent loads are unsupported.
        unsafe {
            std::env::set_var(key, value);
        }
        true
    }
}

/// Keys `std::env` would reject: empty, or containing `=` or NUL.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// In-memory environment, useful for dry runs and tests.
///
/// `$NAME` references in `.env` values are still resolved by `dotenvy`
/// against the process environment and earlier lines of the file, not against
/// this map. Seed it with the process values of any referenced names to get
/// the same result as `ProcessEnv`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the environment and return its variables.
    pub fn into_vars(self) -> HashMap<String, String> {
        self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.vars.contains_key(key) {
            return false;
        }
        self.vars.insert(key.to_string(), value.to_string());
        true
    }
}
