//! External process invocation.
//!
//! Every build step delegates to an external tool (the Python launcher, pip
//! via `python -m pip`, PyInstaller via `python -m PyInstaller`). This module
//! wraps `std::process::Command` with the conventions the orchestrator needs:
//! captured or inherited output, redirection of child stdout+stderr into a
//! log file, and a custom error message naming the failed tool.
//!
//! All invocations are blocking; the child is always waited on to completion
//! before the next step begins. No timeouts are imposed.

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Result of a captured command invocation.
#[derive(Debug)]
pub struct CmdOutput {
    /// Exit status of the child.
    pub status: ExitStatus,
    /// Captured stdout (empty when redirected to a log file).
    pub stdout: String,
    /// Captured stderr (empty when redirected to a log file).
    pub stderr: String,
}

impl CmdOutput {
    /// Whether the child exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Builder for external commands.
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    log_file: Option<(PathBuf, bool)>,
    allow_fail: bool,
    error_msg: Option<String>,
}

impl Cmd {
    /// Start building a command for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            log_file: None,
            allow_fail: false,
            error_msg: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a path argument.
    pub fn arg_path(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push(path.as_ref().display().to_string());
        self
    }

    /// Run the child in the given working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Redirect child stdout and stderr into a log file.
    ///
    /// `append` controls whether the file is appended to or truncated.
    pub fn log_to(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.log_file = Some((path.into(), append));
        self
    }

    /// Do not treat a non-zero exit status as an error; the caller inspects
    /// the result itself.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// Message used when the command fails (or cannot be spawned).
    pub fn error_msg(mut self, msg: impl Into<String>) -> Self {
        self.error_msg = Some(msg.into());
        self
    }

    /// Run the command, capturing output (or redirecting it to the log file).
    pub fn run(self) -> Result<CmdOutput> {
        let describe = self.describe();
        let mut command = self.build_command()?;

        let output = command
            .output()
            .with_context(|| format!("failed to spawn: {}", describe))?;

        let result = CmdOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() && !self.allow_fail {
            let detail = if result.stderr.trim().is_empty() {
                String::new()
            } else {
                format!("\n{}", result.stderr.trim_end())
            };
            match &self.error_msg {
                Some(msg) => bail!("{} (exit status: {}){}", msg, result.status, detail),
                None => bail!("command failed: {} ({}){}", describe, result.status, detail),
            }
        }

        Ok(result)
    }

    /// Run the command with stdio inherited from the parent.
    pub fn run_interactive(self) -> Result<ExitStatus> {
        let describe = self.describe();
        let mut command = self.build_command()?;
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        let status = command
            .status()
            .with_context(|| format!("failed to spawn: {}", describe))?;

        if !status.success() && !self.allow_fail {
            match &self.error_msg {
                Some(msg) => bail!("{} (exit status: {})", msg, status),
                None => bail!("command failed: {} ({})", describe, status),
            }
        }

        Ok(status)
    }

    fn build_command(&self) -> Result<Command> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        if let Some((path, append)) = &self.log_file {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(*append)
                .truncate(!*append)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            let stderr_file = file
                .try_clone()
                .with_context(|| format!("failed to clone log handle: {}", path.display()))?;
            command.stdout(Stdio::from(file));
            command.stderr(Stdio::from(stderr_file));
        }
        Ok(command)
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Find a program on PATH.
pub fn which(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", program));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// Check if a program is available on PATH.
pub fn exists(program: &str) -> bool {
    which(program).is_some()
}
