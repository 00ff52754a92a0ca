//! Packaging artifacts.
//!
//! - `clean` - removes stale PyInstaller output before a run
//! - `bundle` - assembles `--add-data` flags for optional data files
//! - `package` - the one-file attempt and its one-dir fallback

pub mod bundle;
pub mod clean;
pub mod package;

pub use bundle::data_flags;
pub use clean::clean_artifacts;
pub use package::{package_with_fallback, run_pyinstaller, Mode, Outcome};
