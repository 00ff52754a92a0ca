//! PyInstaller invocation: one-file attempt with a one-dir fallback.
//!
//! PyInstaller's own exit status is deliberately ignored; success is judged
//! solely by the existence of the expected output path after each attempt.
//! The one-dir fallback runs only when the one-file output is absent, and
//! it runs exactly once. If neither output exists afterwards, the run fails
//! with an error naming both log files.

use anyhow::{bail, Result};
use std::path::PathBuf;

use super::bundle::data_flags;
use crate::config::{BuildConfig, ENTRY_SCRIPT};
use crate::process::Cmd;
use crate::venv::VirtualEnv;

/// Packaging mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single self-contained executable (`--onefile`).
    OneFile,
    /// Directory containing the executable and its support files (`--onedir`).
    OneDir,
}

impl Mode {
    fn flag(self) -> &'static str {
        match self {
            Mode::OneFile => "--onefile",
            Mode::OneDir => "--onedir",
        }
    }
}

/// Which packaging mode produced the final artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The one-file attempt succeeded.
    OneFile(PathBuf),
    /// The one-dir fallback succeeded.
    OneDir(PathBuf),
}

impl Outcome {
    /// Path of the produced executable.
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::OneFile(path) | Outcome::OneDir(path) => path,
        }
    }
}

/// Run one PyInstaller attempt in the given mode.
///
/// Output goes to the build log: the one-file attempt truncates it, the
/// fallback appends so both attempts stay inspectable. A non-zero exit is
/// not an error here; the caller checks the output path.
pub fn run_pyinstaller(config: &BuildConfig, venv: &VirtualEnv, mode: Mode) -> Result<()> {
    let append_log = mode == Mode::OneDir;

    Cmd::new(venv.python().display().to_string())
        .args(["-m", "PyInstaller"])
        .arg(mode.flag())
        .arg("--windowed")
        .args(data_flags(config))
        .arg(ENTRY_SCRIPT)
        .current_dir(config.project_dir())
        .log_to(config.build_log(), append_log)
        .allow_fail()
        .run()?;

    Ok(())
}

/// Run the primary attempt, short-circuiting the fallback on success.
///
/// The runner is injected so the short-circuit and single-fallback
/// properties hold independently of PyInstaller itself.
pub fn package_with_fallback(
    config: &BuildConfig,
    mut runner: impl FnMut(Mode) -> Result<()>,
) -> Result<Outcome> {
    println!("Packaging (one-file)...");
    runner(Mode::OneFile)?;

    let onefile = config.onefile_output();
    if onefile.exists() {
        return Ok(Outcome::OneFile(onefile));
    }

    println!("One-file output missing, retrying in one-dir mode...");
    runner(Mode::OneDir)?;

    let onedir = config.onedir_output();
    if onedir.exists() {
        return Ok(Outcome::OneDir(onedir));
    }

    bail!(
        "Packaging failed in both modes.\n\
         Expected {} or {}.\n\
         Inspect {} and {} for details.",
        onefile.display(),
        onedir.display(),
        config.build_log().display(),
        config.pip_log().display(),
    )
}
