//! The scaffolding pipeline.
//!
//! Five steps, strictly sequential, fail-fast: manifest precondition and
//! transform, directory creation, config file emission, and dev dependency
//! installation. There is no rollback; files written before a failure stay
//! on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::error::InstallError;
use crate::exec::Executor;
use crate::logging::Logger;
use crate::manifest::Manifest;
use crate::templates;

/// Options for a scaffolding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOpts {
    /// Perform all filesystem steps but skip the package manager invocation.
    pub skip_install: bool,
}

/// Scaffold the project in `root`.
///
/// The manifest is loaded before anything is written, so a missing or
/// unparsable `package.json` aborts the run with the directory untouched.
///
/// # Errors
///
/// Returns an error on a missing/invalid manifest, on any filesystem write
/// failure, or when the package manager cannot be run or exits non-zero.
pub fn run(root: &Path, executor: &dyn Executor, log: &Logger, opts: ScaffoldOpts) -> Result<()> {
    log.stage("Updating package.json");
    let mut manifest = Manifest::load(root)?;
    manifest.transform();
    manifest.save()?;
    log.info("package.json updated");

    log.stage("Creating project directories");
    ensure_dir(root, templates::SOURCE_DIR, log)?;
    ensure_dir(root, templates::OUT_DIR, log)?;

    log.stage("Writing config files");
    for (name, content) in templates::CONFIG_FILES {
        fs::write(root.join(name), content)
            .with_context(|| format!("failed to write {name}"))?;
        log.info(&format!("{name} written"));
    }

    if opts.skip_install {
        log.info("dev dependency installation skipped");
    } else {
        log.stage("Installing dev dependencies");
        install_dev_dependencies(root, executor)?;
    }

    log.info("Initialization complete");
    Ok(())
}

/// Create `root/name` if absent. Idempotent; reports which case applied.
fn ensure_dir(root: &Path, name: &str, log: &Logger) -> Result<()> {
    let path = root.join(name);
    if path.exists() {
        log.info(&format!("{name}/ already exists"));
    } else {
        fs::create_dir(&path).with_context(|| format!("failed to create {name}/"))?;
        log.info(&format!("{name}/ created"));
    }
    Ok(())
}

/// Install the fixed dev dependency set with the package manager, streaming
/// its output straight to the terminal.
fn install_dev_dependencies(root: &Path, executor: &dyn Executor) -> Result<(), InstallError> {
    let program = templates::PACKAGE_MANAGER;
    if !executor.available(program) {
        return Err(InstallError::ToolNotFound(program.to_string()));
    }
    let mut args: Vec<String> = vec!["add".to_string(), "-D".to_string()];
    args.extend(templates::DEV_DEPENDENCIES.iter().map(ToString::to_string));
    let exit = executor
        .run_inherited(root, program, &args)
        .map_err(|source| InstallError::Spawn {
            program: program.to_string(),
            source,
        })?;
    if exit.success {
        Ok(())
    } else {
        Err(InstallError::Failed {
            code: exit.code.unwrap_or(-1),
        })
    }
}
