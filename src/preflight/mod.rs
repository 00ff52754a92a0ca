//! Preflight checks for the packaging run.
//!
//! Validates prerequisites BEFORE anything on disk is touched. The build
//! itself only gates on the interpreter check; the full report is what the
//! `check` subcommand prints.

mod interpreter;

pub use interpreter::{check_interpreter, Interpreter};

use std::path::Path;

use crate::config::BuildConfig;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a failing check result.
    pub fn fail(
        name: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Preflight report over all checks.
#[derive(Debug, Default)]
pub struct PreflightReport {
    /// All check results
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Check if all preflight checks passed.
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Get all failing checks.
    pub fn errors(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Print a summary of the preflight checks.
    pub fn print_summary(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let status = if check.passed { "[OK]" } else { "[FAIL]" };
            println!("{} {}: {}", status, check.name, check.message);
            if let Some(suggestion) = &check.suggestion {
                println!("       Suggestion: {}", suggestion);
            }
        }

        println!();
        if self.is_ok() {
            println!("All preflight checks passed");
        } else {
            println!(
                "Preflight checks failed: {} of {} passed",
                self.checks.iter().filter(|c| c.passed).count(),
                self.checks.len()
            );
        }
    }
}

/// Run all preflight checks for the given project.
pub fn run_all(config: &BuildConfig) -> PreflightReport {
    let mut report = PreflightReport::default();

    report.checks.push(check_interpreter());
    report.checks.push(check_entry_script(&config.entry_script()));

    report
}

/// Check that the entry script exists.
///
/// The build itself does not gate on this (a missing script surfaces as a
/// packaging failure), but the check report flags it early.
fn check_entry_script(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult::pass("entry script", format!("Found at {}", path.display()))
    } else {
        CheckResult::fail(
            "entry script",
            format!("Not found at {}", path.display()),
            "Run from the CashApp project directory (the one containing app.py)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_pass() {
        let result = CheckResult::pass("test", "passed");
        assert!(result.passed);
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn test_check_result_fail() {
        let result = CheckResult::fail("test", "failed", "fix it");
        assert!(!result.passed);
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn test_preflight_report_is_ok() {
        let mut report = PreflightReport::default();
        assert!(report.is_ok()); // Empty is OK

        report.checks.push(CheckResult::pass("test1", "ok"));
        assert!(report.is_ok());

        report.checks.push(CheckResult::fail("test2", "bad", "fix"));
        assert!(!report.is_ok());
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn test_check_entry_script_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_entry_script(&dir.path().join("app.py"));
        assert!(!result.passed);
    }

    #[test]
    fn test_check_entry_script_present() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("app.py");
        std::fs::write(&script, "print('hi')\n").unwrap();
        assert!(check_entry_script(&script).passed);
    }
}
