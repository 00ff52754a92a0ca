//! CashApp build orchestrator library.
//!
//! Packages the CashApp desktop application (`app.py`) into a standalone
//! executable: locate Python 3.11, recreate the `venv` virtual environment,
//! install the pinned dependency set, then run PyInstaller in one-file mode
//! with a one-dir fallback.
//!
//! Success at each packaging stage is judged solely by the existence of the
//! expected output path; all tool detail lands in two log files that the
//! orchestrator never parses.

pub mod artifact;
pub mod config;
pub mod deps;
pub mod preflight;
pub mod process;
pub mod venv;

use std::time::Instant;

/// Wall-clock timer for build sections.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Start timing a named section.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Print the elapsed time for this section.
    pub fn finish(self) {
        let secs = self.start.elapsed().as_secs_f64();
        if secs >= 60.0 {
            println!("  [{} done in {:.1}m]", self.label, secs / 60.0);
        } else {
            println!("  [{} done in {:.1}s]", self.label, secs);
        }
    }
}
