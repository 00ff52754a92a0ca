//! Stale artifact cleanup.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::BuildConfig;

/// Remove prior packaging output so stale artifacts can never mask a
/// failed build: `dist/`, `build/`, and the generated spec file.
///
/// Unconditional and idempotent; missing paths are fine.
pub fn clean_artifacts(config: &BuildConfig) -> Result<()> {
    remove_dir(&config.dist_dir())?;
    remove_dir(&config.build_dir())?;

    let spec_file = config.spec_file();
    if spec_file.exists() {
        fs::remove_file(&spec_file)
            .with_context(|| format!("failed to remove {}", spec_file.display()))?;
    }

    Ok(())
}

fn remove_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("failed to remove {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_all_stale_output() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());

        fs::create_dir_all(config.dist_dir().join("app")).unwrap();
        fs::create_dir_all(config.build_dir()).unwrap();
        fs::write(config.spec_file(), "# spec\n").unwrap();

        clean_artifacts(&config).unwrap();

        assert!(!config.dist_dir().exists());
        assert!(!config.build_dir().exists());
        assert!(!config.spec_file().exists());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());

        clean_artifacts(&config).unwrap();
        clean_artifacts(&config).unwrap();
    }

    #[test]
    fn test_clean_leaves_data_files_alone() {
        let dir = tempdir().unwrap();
        let config = BuildConfig::new(dir.path());
        let data = dir.path().join("data.db");
        fs::write(&data, "sqlite").unwrap();

        clean_artifacts(&config).unwrap();
        assert!(data.exists());
    }
}
