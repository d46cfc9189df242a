//! Execution of external image processor commands

use crate::error::{ComposeError, Result};
use log::debug;
use std::ffi::OsString;
use std::process::Command;

/// A fully resolved external command invocation
///
/// Built without a shell: arguments are handed to the operating system
/// verbatim, so paths containing spaces or metacharacters pass through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, resolved against the executable search path at spawn time
    pub program: String,
    /// Arguments in order
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Create a new invocation
    pub fn new(program: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build a [`std::process::Command`] for this invocation
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Capability for executing an external command invocation
///
/// Injected into the composer so tests can verify the built pipelines
/// without any image processor installed.
pub trait CommandRunner: Send + Sync {
    /// Execute the invocation, blocking until it completes
    ///
    /// # Errors
    ///
    /// Returns `ComposeError::Io` when the process cannot be spawned and
    /// `ComposeError::CommandFailed` when it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runner that spawns the invocation as a child process and waits for it
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!(
            "Running '{}' with {} argument(s)",
            invocation.program,
            invocation.args.len()
        );

        let output = invocation.to_command().output()?;
        if !output.status.success() {
            return Err(ComposeError::CommandFailed {
                program: invocation.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
