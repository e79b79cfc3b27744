//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build a `LoadConfig` from the parsed file options.
//!
//! Non-responsibilities:
//! - Does not load or verify anything (see `main`).
//! - Does not spawn the wrapped command (see `exec` module).

use clap::Parser;
use dotenv_safe_config::LoadConfig;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dotenv-safe")]
#[command(
    about = "Load .env files and fail fast if any variable listed in example.env is not set",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotenv-safe\n  dotenv-safe -e .env -e .env.local\n  dotenv-safe -x example.env -x example.secrets.env -- ./server --port 8080\n  dotenv-safe --list -x example.env\n"
)]
pub struct Cli {
    /// Env file to load into the environment (repeatable, defaults to .env)
    #[arg(
        short,
        long = "env",
        value_name = "FILE",
        env = "DOTENV_SAFE_ENV",
        value_delimiter = ','
    )]
    pub env_files: Vec<PathBuf>,

    /// Template file listing required variables (repeatable, defaults to example.env)
    #[arg(
        short = 'x',
        long = "example",
        value_name = "FILE",
        env = "DOTENV_SAFE_EXAMPLE",
        value_delimiter = ','
    )]
    pub example_files: Vec<PathBuf>,

    /// Print the variable names required by the template files and exit
    #[arg(long, conflicts_with = "command")]
    pub list: bool,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging (overridden by RUST_LOG when set)
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run once the environment is verified
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<OsString>,
}

impl Cli {
    /// The load configuration described by `--env` and `--example`.
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig::new()
            .with_actual_files(self.env_files.iter().cloned())
            .with_example_files(self.example_files.iter().cloned())
    }
}
