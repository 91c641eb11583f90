//! Domain-specific error types for the scaffolder.
//!
//! Internal modules return typed errors ([`ManifestError`], [`InstallError`])
//! while the orchestration layer converts them to [`anyhow::Error`] via the
//! standard `?` operator. There is no recovery anywhere: the first failure
//! surfaces to the terminal and halts the run with a non-zero exit.

use thiserror::Error;

/// Errors that arise from loading, transforming, or writing `package.json`.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file does not exist in the target directory. This is the
    /// precondition guard: nothing has been written when it fires.
    #[error("package.json does not exist in {dir}, please run 'pnpm init' first")]
    Missing {
        /// Directory that was searched for `package.json`.
        dir: String,
    },

    /// The manifest file contains invalid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Path to the unparsable manifest.
        path: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The manifest parsed, but its root is not a JSON object.
    #[error("{path}: manifest root must be a JSON object")]
    NotAnObject {
        /// Path to the offending manifest.
        path: String,
    },

    /// An I/O error occurred while reading or writing the manifest.
    #[error("IO error accessing {path}: {source}")]
    Io {
        /// Path to the file that could not be accessed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from the dev dependency installation step.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The package manager binary is not on `PATH`.
    #[error("'{0}' not found on PATH, install it before running tsinit")]
    ToolNotFound(String),

    /// The package manager process could not be launched.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error from process creation.
        source: std::io::Error,
    },

    /// The package manager ran but exited with a non-zero status. Its own
    /// diagnostics are already on the terminal via the inherited streams.
    #[error("dev dependency installation failed (exit {code})")]
    Failed {
        /// Exit code reported by the child, or `-1` if terminated by signal.
        code: i32,
    },
}
