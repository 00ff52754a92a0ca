//! Dependency installation into the fresh venv.
//!
//! Two sequential pip invocations: first the packaging baseline (pip,
//! setuptools, wheel), then the fixed application set. Both write their
//! combined stdout+stderr to `pip_install.log` - the first truncates it,
//! the second appends.
//!
//! The original build ignored pip failures and let a broken install surface
//! later as an inscrutable packaging error. Here a non-zero pip status is
//! fatal, pointing at the log.

use anyhow::{Context, Result};

use crate::config::BuildConfig;
use crate::process::Cmd;
use crate::venv::VirtualEnv;

/// Packaging/tooling baseline, upgraded first.
pub const BASELINE_PACKAGES: &[&str] = &["pip", "setuptools", "wheel"];

/// Fixed application dependency set (the imports of app.py plus the
/// packaging tool itself).
pub const APP_PACKAGES: &[&str] = &["pyinstaller", "pandas", "matplotlib"];

/// Install the baseline and application packages into the venv.
pub fn install_all(config: &BuildConfig, venv: &VirtualEnv) -> Result<()> {
    println!("Upgrading pip baseline ({})...", BASELINE_PACKAGES.join(", "));
    pip_install(config, venv, BASELINE_PACKAGES, false)
        .with_context(|| pip_failure_hint(config))?;

    println!("Installing app dependencies ({})...", APP_PACKAGES.join(", "));
    pip_install(config, venv, APP_PACKAGES, true).with_context(|| pip_failure_hint(config))?;

    Ok(())
}

/// Run one `pip install --upgrade` invocation, redirected to the pip log.
fn pip_install(
    config: &BuildConfig,
    venv: &VirtualEnv,
    packages: &[&str],
    append_log: bool,
) -> Result<()> {
    Cmd::new(venv.python().display().to_string())
        .args(["-m", "pip", "install", "--upgrade"])
        .args(packages.iter().copied())
        .current_dir(config.project_dir())
        .log_to(config.pip_log(), append_log)
        .error_msg(format!("pip install failed for: {}", packages.join(", ")))
        .run()?;
    Ok(())
}

fn pip_failure_hint(config: &BuildConfig) -> String {
    format!(
        "Dependency installation failed. See {} for details",
        config.pip_log().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_upgraded_before_app_packages() {
        assert_eq!(BASELINE_PACKAGES[0], "pip");
        assert!(APP_PACKAGES.contains(&"pyinstaller"));
    }

    #[test]
    fn test_package_sets_disjoint() {
        for package in APP_PACKAGES {
            assert!(!BASELINE_PACKAGES.contains(package));
        }
    }
}
