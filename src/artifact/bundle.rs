//! `--add-data` flag assembly for optional data files.
//!
//! The app ships with whatever saved state sits next to it: an autosave CSV
//! and the SQLite database. For each fixed-named file present in the project
//! directory, one `--add-data <file><sep>.` instruction is appended. The
//! check order is fixed, flags are concatenated, and nothing is deduplicated.

use crate::config::{BuildConfig, DATA_FILES};

/// PyInstaller's add-data separator (platform-specific).
const ADD_DATA_SEP: char = if cfg!(windows) { ';' } else { ':' };

/// Assemble the `--add-data` flags for the data files present on disk.
pub fn data_flags(config: &BuildConfig) -> Vec<String> {
    let mut flags = Vec::new();
    for name in DATA_FILES {
        if config.project_dir().join(name).exists() {
            flags.push("--add-data".to_string());
            flags.push(format!("{}{}{}", name, ADD_DATA_SEP, "."));
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn has_flag_for(flags: &[String], name: &str) -> bool {
        flags.iter().any(|f| f.starts_with(name))
    }

    #[test]
    fn test_no_data_files_no_flags() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        assert!(data_flags(&config).is_empty());
    }

    #[test]
    fn test_autosave_alone() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        fs::write(dir.path().join("autosave.csv"), "id,date\n").unwrap();

        let flags = data_flags(&config);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0], "--add-data");
        assert!(has_flag_for(&flags, "autosave.csv"));
        assert!(!has_flag_for(&flags, "data.db"));
    }

    #[test]
    fn test_database_alone() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        fs::write(dir.path().join("data.db"), "sqlite").unwrap();

        let flags = data_flags(&config);
        assert_eq!(flags.len(), 2);
        assert!(has_flag_for(&flags, "data.db"));
        assert!(!has_flag_for(&flags, "autosave.csv"));
    }

    #[test]
    fn test_both_files_fixed_order() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        fs::write(dir.path().join("data.db"), "sqlite").unwrap();
        fs::write(dir.path().join("autosave.csv"), "id,date\n").unwrap();

        let flags = data_flags(&config);
        assert_eq!(flags.len(), 4);
        // autosave.csv is always checked first, regardless of creation order
        assert!(flags[1].starts_with("autosave.csv"));
        assert!(flags[3].starts_with("data.db"));
    }

    #[test]
    fn test_flag_bundles_into_root() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        fs::write(dir.path().join("autosave.csv"), "").unwrap();

        let flags = data_flags(&config);
        assert!(flags[1].ends_with('.'));
    }
}
