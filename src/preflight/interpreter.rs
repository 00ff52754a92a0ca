//! Python 3.11 interpreter discovery.
//!
//! The original build pins an exact interpreter version. On Windows the
//! `py` launcher selects it (`py -3.11`); elsewhere the versioned binary
//! `python3.11` is used directly. There is no fallback to another version:
//! if this interpreter cannot be invoked, the whole build aborts before
//! touching the filesystem.

use anyhow::{Context, Result};

use super::CheckResult;
use crate::config::PYTHON_VERSION;
use crate::process::Cmd;

/// Handle to the pinned Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: String,
    select_args: Vec<String>,
}

impl Interpreter {
    /// The interpreter required by this build (Python 3.11).
    pub fn required() -> Self {
        if cfg!(windows) {
            Self {
                program: "py".to_string(),
                select_args: vec![format!("-{}", PYTHON_VERSION)],
            }
        } else {
            Self {
                program: format!("python{}", PYTHON_VERSION),
                select_args: Vec::new(),
            }
        }
    }

    /// Interpreter backed by an explicit program, without version
    /// selection arguments.
    pub fn from_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            select_args: Vec::new(),
        }
    }

    /// Start a command that runs this interpreter.
    pub fn cmd(&self) -> Cmd {
        Cmd::new(self.program.as_str()).args(self.select_args.iter().cloned())
    }

    /// Human-readable invocation, for messages.
    pub fn describe(&self) -> String {
        if self.select_args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.select_args.join(" "))
        }
    }

    /// Verify the interpreter is invocable by running `--version`.
    ///
    /// Returns the reported version line. Any failure (program missing,
    /// launcher has no such version) is an error; callers treat it as fatal.
    pub fn verify(&self) -> Result<String> {
        let result = self
            .cmd()
            .arg("--version")
            .error_msg(format!(
                "Python {} not found ('{}' failed)",
                PYTHON_VERSION,
                self.describe()
            ))
            .run()
            .with_context(|| {
                format!(
                    "Python {} is required. Install it and ensure '{}' works",
                    PYTHON_VERSION,
                    self.describe()
                )
            })?;

        // `python --version` historically wrote to stderr; accept either.
        let version = if result.stdout.trim().is_empty() {
            result.stderr.trim().to_string()
        } else {
            result.stdout.trim().to_string()
        };
        Ok(version)
    }
}

/// Preflight check for the pinned interpreter.
pub fn check_interpreter() -> CheckResult {
    let interpreter = Interpreter::required();
    match interpreter.verify() {
        Ok(version) => CheckResult::pass(
            format!("Python {}", PYTHON_VERSION),
            format!("{} ({})", version, interpreter.describe()),
        ),
        Err(_) => CheckResult::fail(
            format!("Python {}", PYTHON_VERSION),
            format!("'{}' is not invocable", interpreter.describe()),
            format!(
                "Install Python {} from https://www.python.org/downloads/",
                PYTHON_VERSION
            ),
        ),
    }
}
