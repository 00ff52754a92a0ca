//! Build configuration for the CashApp packaging run.
//!
//! All names here are fixed at authoring time: the entry script, the venv
//! directory, the two log files, the optional data files, and the expected
//! PyInstaller output paths. Everything is resolved relative to a single
//! project directory.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Required Python version, exact. No alternate version search.
pub const PYTHON_VERSION: &str = "3.11";

/// Entry script packaged by PyInstaller. Not checked for existence up
/// front; a missing script surfaces as a packaging failure downstream.
pub const ENTRY_SCRIPT: &str = "app.py";

/// Application name (PyInstaller derives it from the entry script stem).
pub const APP_NAME: &str = "app";

/// Virtual environment directory, destroyed and recreated each run.
pub const VENV_DIR: &str = "venv";

/// Log sink for both pip invocations.
pub const PIP_LOG: &str = "pip_install.log";

/// Log sink for both PyInstaller attempts.
pub const BUILD_LOG: &str = "pyinstaller.log";

/// Optional data files bundled into the executable when present, checked
/// in this order.
pub const DATA_FILES: &[&str] = &["autosave.csv", "data.db"];

/// Build configuration rooted at a project directory.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    project_dir: PathBuf,
}

impl BuildConfig {
    /// Create a configuration for the given project directory.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// The project directory all paths are resolved against.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The venv directory.
    pub fn venv_dir(&self) -> PathBuf {
        self.project_dir.join(VENV_DIR)
    }

    /// The interpreter inside the venv.
    pub fn venv_python(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir().join("Scripts").join("python.exe")
        } else {
            self.venv_dir().join("bin").join("python")
        }
    }

    /// The entry script path.
    pub fn entry_script(&self) -> PathBuf {
        self.project_dir.join(ENTRY_SCRIPT)
    }

    /// pip log file path.
    pub fn pip_log(&self) -> PathBuf {
        self.project_dir.join(PIP_LOG)
    }

    /// PyInstaller log file path.
    pub fn build_log(&self) -> PathBuf {
        self.project_dir.join(BUILD_LOG)
    }

    /// PyInstaller output directory.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_dir.join("dist")
    }

    /// PyInstaller work directory.
    pub fn build_dir(&self) -> PathBuf {
        self.project_dir.join("build")
    }

    /// Spec file generated by PyInstaller, removed before each run.
    pub fn spec_file(&self) -> PathBuf {
        self.project_dir.join(format!("{}.spec", APP_NAME))
    }

    /// Expected output of the one-file packaging attempt.
    pub fn onefile_output(&self) -> PathBuf {
        self.dist_dir().join(format!("{}{}", APP_NAME, EXE_SUFFIX))
    }

    /// Expected output of the one-dir fallback attempt.
    pub fn onedir_output(&self) -> PathBuf {
        self.dist_dir()
            .join(APP_NAME)
            .join(format!("{}{}", APP_NAME, EXE_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted_at_project_dir() {
        let config = BuildConfig::new("/work/cashapp");

        assert_eq!(config.venv_dir(), Path::new("/work/cashapp/venv"));
        assert_eq!(config.pip_log(), Path::new("/work/cashapp/pip_install.log"));
        assert_eq!(config.build_log(), Path::new("/work/cashapp/pyinstaller.log"));
        assert_eq!(config.dist_dir(), Path::new("/work/cashapp/dist"));
        assert_eq!(config.spec_file(), Path::new("/work/cashapp/app.spec"));
    }

    #[test]
    fn test_onedir_output_is_under_app_subdir() {
        let config = BuildConfig::new("/work/cashapp");
        let onedir = config.onedir_output();

        assert!(onedir.starts_with(config.dist_dir().join(APP_NAME)));
        assert_ne!(config.onefile_output(), onedir);
    }

    #[test]
    fn test_venv_python_is_inside_venv() {
        let config = BuildConfig::new("/work/cashapp");
        assert!(config.venv_python().starts_with(config.venv_dir()));
    }

    #[test]
    fn test_data_files_order_fixed() {
        assert_eq!(DATA_FILES, &["autosave.csv", "data.db"]);
    }
}
