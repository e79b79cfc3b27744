//! Fail-fast verification of required environment variables.
//!
//! This crate loads one or more `.env` files into the process environment and
//! then checks that every variable named in one or more template files
//! (`example.env` by default) is set, failing on the first one that is not.

pub mod constants;
mod loader;

pub use loader::{
    Environment, LoadConfig, LoadError, MemoryEnv, ProcessEnv, load, load_default, load_many,
    load_many_into, read_required_keys, required_keys, resolve_actual_files,
    resolve_example_files,
};
