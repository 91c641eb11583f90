//! External command execution behind a narrow, mockable seam.
//!
//! The scaffolder shells out exactly once (to the package manager), but that
//! call is hidden behind [`Executor`] so tests can substitute a recording
//! stub instead of performing a real installation.

use std::path::Path;
use std::process::Command;

#[cfg(test)]
use mockall::automock;

/// Outcome of a child process run with inherited standard streams.
///
/// The child's output went straight to the terminal, so only the exit status
/// is captured here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    /// Whether the child exited with status zero.
    pub success: bool,
    /// Exit code, if the child exited normally (signal terminations on Unix
    /// yield `None`).
    pub code: Option<i32>,
}

/// Abstraction over running external commands.
///
/// The production implementation is [`SystemExecutor`]; unit tests use the
/// generated `MockExecutor`.
#[cfg_attr(test, automock)]
pub trait Executor: Send + Sync {
    /// Returns `true` if `program` resolves on `PATH`.
    fn available(&self, program: &str) -> bool;

    /// Run `program` in `dir` with the child's stdin/stdout/stderr connected
    /// directly to this process's streams, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned (e.g. the binary
    /// disappeared between the `available` check and the run).
    fn run_inherited(
        &self,
        dir: &Path,
        program: &str,
        args: &[String],
    ) -> std::io::Result<ExitInfo>;
}

/// Production [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run_inherited(
        &self,
        dir: &Path,
        program: &str,
        args: &[String],
    ) -> std::io::Result<ExitInfo> {
        // `status()` leaves the child's standard streams inherited, so the
        // package manager's progress output is visible live.
        let status = Command::new(program).args(args).current_dir(dir).status()?;
        Ok(ExitInfo {
            success: status.success(),
            code: status.code(),
        })
    }
}
