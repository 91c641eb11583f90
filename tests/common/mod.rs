// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project and a recording executor so
// each test can drive the full scaffolding pipeline without touching pnpm or
// the real working directory.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code, clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tsinit_cli::exec::{Executor, ExitInfo};
use tsinit_cli::manifest::MANIFEST_FILE;

/// A recorded external-command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Working directory the command was launched in.
    pub dir: PathBuf,
    /// Program name.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

/// [`Executor`] stub that records invocations instead of spawning processes.
#[derive(Debug)]
pub struct RecordingExecutor {
    /// Answer returned by `available`.
    pub tool_available: bool,
    /// Exit reported for every `run_inherited` call.
    pub exit: ExitInfo,
    calls: Mutex<Vec<Invocation>>,
}

impl RecordingExecutor {
    /// An executor whose tool exists and always succeeds.
    pub fn succeeding() -> Self {
        Self {
            tool_available: true,
            exit: ExitInfo {
                success: true,
                code: Some(0),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An executor whose tool exists but exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            exit: ExitInfo {
                success: false,
                code: Some(code),
            },
            ..Self::succeeding()
        }
    }

    /// All invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }
}

impl Executor for RecordingExecutor {
    fn available(&self, _program: &str) -> bool {
        self.tool_available
    }

    fn run_inherited(
        &self,
        dir: &Path,
        program: &str,
        args: &[String],
    ) -> std::io::Result<ExitInfo> {
        self.calls
            .lock()
            .expect("recording lock poisoned")
            .push(Invocation {
                dir: dir.to_path_buf(),
                program: program.to_string(),
                args: args.to_vec(),
            });
        Ok(self.exit)
    }
}

/// An isolated project directory backed by a [`tempfile::TempDir`].
pub struct ProjectDir {
    /// Temporary directory holding the project.
    pub root: tempfile::TempDir,
}

impl ProjectDir {
    /// Create an empty project directory (no manifest).
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Create a project directory seeded with the given manifest.
    pub fn with_manifest(manifest: &serde_json::Value) -> Self {
        let project = Self::empty();
        project.write_manifest(manifest);
        project
    }

    /// Path to the project root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Overwrite the manifest with `value`.
    pub fn write_manifest(&self, value: &serde_json::Value) {
        std::fs::write(
            self.path().join(MANIFEST_FILE),
            serde_json::to_string_pretty(value).expect("serialize manifest"),
        )
        .expect("write manifest");
    }

    /// Read the manifest back as a JSON value (field order preserved).
    pub fn read_manifest(&self) -> serde_json::Value {
        let text =
            std::fs::read_to_string(self.path().join(MANIFEST_FILE)).expect("read manifest");
        serde_json::from_str(&text).expect("parse manifest")
    }

    /// Raw manifest bytes, for serialization-shape assertions.
    pub fn read_manifest_text(&self) -> String {
        std::fs::read_to_string(self.path().join(MANIFEST_FILE)).expect("read manifest")
    }
}
