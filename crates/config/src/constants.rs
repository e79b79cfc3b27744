//! Centralized constants for the dotenv-safe workspace.
//!
//! This module contains the built-in file names used when a caller does not
//! name any files for a category.

// =============================================================================
// Default File Names
// =============================================================================

/// Default file whose `KEY=VALUE` lines populate the environment.
pub const DEFAULT_ACTUAL_FILE: &str = ".env";

/// Default template file listing the variable names that must be set.
pub const DEFAULT_EXAMPLE_FILE: &str = "example.env";
