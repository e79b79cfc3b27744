//! dotenv-safe - verify required environment variables before a program starts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load `.env` files and verify them against template files.
//! - Optionally run a wrapped command with the verified environment.
//!
//! Does NOT handle:
//! - Loading or verification logic itself (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout belongs to `--list` output and the wrapped command.
//! - The first load or verification failure ends the process with a structured exit code.

mod args;
mod error;
mod exec;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dotenv_safe_config::{load_many, read_required_keys};
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    let config = cli.load_config();

    if cli.list {
        for path in config.example_files() {
            for key in read_required_keys(&path)? {
                println!("{}", key);
            }
        }
        return Ok(ExitCode::Success.as_i32());
    }

    load_many(&config)?;

    if cli.command.is_empty() {
        if !cli.quiet {
            println!("All required environment variables are set");
        }
        return Ok(ExitCode::Success.as_i32());
    }

    Ok(exec::run_command(&cli.command)?)
}
