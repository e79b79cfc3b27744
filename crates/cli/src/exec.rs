//! Running the wrapped command after verification.
//!
//! Responsibilities:
//! - Spawn the command with the current (verified) process environment.
//! - Translate its exit status into this process's exit code.
//!
//! Invariants:
//! - stdin, stdout and stderr are inherited.
//! - A child killed by a signal maps to 128 + signal number on Unix.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus};
use thiserror::Error;

use crate::error::ExitCode;

/// Failures to start the wrapped command.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("command not found: {program}")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Failed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run `command` (program followed by its arguments) and return its exit code.
pub fn run_command(command: &[OsString]) -> Result<i32, SpawnError> {
    let Some((program, args)) = command.split_first() else {
        return Ok(ExitCode::Success.as_i32());
    };
    let name = program.to_string_lossy().into_owned();

    tracing::debug!(program = %name, args = args.len(), "Running command");

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => SpawnError::NotFound {
                program: name.clone(),
            },
            _ => SpawnError::Failed {
                program: name.clone(),
                source: e,
            },
        })?;

    let code = status_code(status);
    tracing::debug!(program = %name, code, "Command exited");
    Ok(code)
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(ExitCode::GeneralError.as_i32())
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(ExitCode::GeneralError.as_i32())
}
