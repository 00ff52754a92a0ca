//! Virtual environment teardown and recreation.
//!
//! The venv is disposable: every run deletes the old directory outright and
//! creates a fresh one bound to the pinned interpreter. There is never more
//! than one environment directory, and a rerun can never merge stale
//! packages into a new environment.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::preflight::Interpreter;

/// A created virtual environment.
#[derive(Debug)]
pub struct VirtualEnv {
    dir: PathBuf,
    python: PathBuf,
}

impl VirtualEnv {
    /// The environment directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The interpreter inside the environment.
    pub fn python(&self) -> &Path {
        &self.python
    }
}

/// Delete the environment directory if it exists.
///
/// Destructive by design and idempotent: absent directories are fine.
pub fn remove_existing(dir: &Path) -> Result<()> {
    if dir.exists() {
        println!("Removing old venv at {}...", dir.display());
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove old venv: {}", dir.display()))?;
    }
    Ok(())
}

/// Recreate the venv from scratch with the given interpreter.
///
/// Fails fast if creation does not succeed or does not yield a usable
/// interpreter inside the environment.
pub fn recreate(config: &BuildConfig, interpreter: &Interpreter) -> Result<VirtualEnv> {
    let dir = config.venv_dir();
    remove_existing(&dir)?;

    println!("Creating venv at {}...", dir.display());
    interpreter
        .cmd()
        .args(["-m", "venv"])
        .arg_path(&dir)
        .current_dir(config.project_dir())
        .error_msg("venv creation failed")
        .run()
        .context("Failed to create the virtual environment")?;

    let python = config.venv_python();
    if !python.exists() {
        bail!(
            "venv created but interpreter missing at {}",
            python.display()
        );
    }

    Ok(VirtualEnv { dir, python })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_remove_existing_deletes_directory() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join("venv");
        fs::create_dir_all(venv.join("lib/site-packages")).unwrap();
        fs::write(venv.join("pyvenv.cfg"), "home = /usr\n").unwrap();

        remove_existing(&venv).unwrap();
        assert!(!venv.exists());
    }

    #[test]
    fn test_remove_existing_is_idempotent() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join("venv");

        remove_existing(&venv).unwrap();
        remove_existing(&venv).unwrap();
        assert!(!venv.exists());
    }

    #[test]
    fn test_recreate_fails_with_missing_interpreter() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        let interpreter = Interpreter::from_program("definitely_not_python_12345");

        // Stale venv contents must still be wiped before the attempt fails
        let venv = config.venv_dir();
        fs::create_dir_all(&venv).unwrap();
        fs::write(venv.join("stale.txt"), "old").unwrap();

        assert!(recreate(&config, &interpreter).is_err());
        assert!(!venv.join("stale.txt").exists());
    }
}
