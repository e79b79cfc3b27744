//! Environment file loader and required-variable verification.
//!
//! Responsibilities:
//! - Load `KEY=VALUE` pairs from actual `.env` files into an `Environment`.
//! - Read template files and verify each required name is present.
//! - Resolve default file lists when the caller names none.
//!
//! Does NOT handle:
//! - Parsing `.env` syntax (delegated to `dotenvy`).
//! - Mapping failures to process exit codes (see the `dotenv-safe` binary).
//!
//! Invariants / Assumptions:
//! - Variables already present in the environment are never overwritten.
//! - All actual files are loaded before any template file is read.
//! - The first failure aborts the whole load; nothing after it is attempted.

mod actual;
mod builder;
mod defaults;
mod env;
mod error;
mod example;

#[cfg(test)]
mod tests;

pub use builder::{LoadConfig, load, load_default, load_many, load_many_into};
pub use defaults::{resolve_actual_files, resolve_example_files};
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use error::LoadError;
pub use example::{read_required_keys, required_keys};
