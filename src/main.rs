//! CashApp build orchestrator CLI.
//!
//! Packages the CashApp desktop application (`app.py`) into a standalone
//! executable with PyInstaller.
//!
//! # Usage
//!
//! ```bash
//! # Full build: venv + dependencies + packaging (with one-dir fallback)
//! cashpack build
//!
//! # Remove stale packaging output (dist/, build/, app.spec)
//! cashpack clean
//!
//! # Verify prerequisites without touching anything
//! cashpack check
//!
//! # Show what is present and what the next step is
//! cashpack status
//! ```
//!
//! The build is a strict sequence: Python 3.11 discovery, venv recreation,
//! pip installs, artifact cleanup, then PyInstaller one-file mode with a
//! one-dir fallback. Success of each packaging attempt is judged by the
//! existence of its expected output path.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cashpack::config::BuildConfig;
use cashpack::preflight::Interpreter;
use cashpack::{artifact, deps, preflight, venv, Timer};

#[derive(Parser)]
#[command(name = "cashpack")]
#[command(author, version, about = "CashApp standalone-executable builder", long_about = None)]
struct Cli {
    /// Project directory containing app.py (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full build: venv, dependencies, packaging
    Build,

    /// Remove stale packaging output (dist/, build/, app.spec)
    Clean,

    /// Run preflight checks only
    Check,

    /// Show build status and next steps
    Status,
}

fn main() {
    let cli = Cli::parse();
    let config = BuildConfig::new(cli.project_dir);

    let result = match cli.command {
        Commands::Build => cmd_build(&config),
        Commands::Clean => cmd_clean(&config),
        Commands::Check => cmd_check(&config),
        Commands::Status => cmd_status(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn cmd_build(config: &BuildConfig) -> Result<()> {
    use std::time::Instant;

    let build_start = Instant::now();
    println!("=== CashApp Build ===\n");

    // 1. Interpreter discovery - must pass before anything on disk changes.
    let interpreter = Interpreter::required();
    let version = interpreter.verify()?;
    println!("Interpreter: {} ({})", version, interpreter.describe());

    // 2. Environment reset: delete and recreate the venv.
    let t = Timer::start("venv");
    let venv = venv::recreate(config, &interpreter)?;
    t.finish();

    // 3. Dependency installation, logged to pip_install.log.
    println!("\nInstalling dependencies (see {})...", config.pip_log().display());
    let t = Timer::start("dependencies");
    deps::install_all(config, &venv)?;
    t.finish();

    // 4. Stale artifact cleanup.
    artifact::clean_artifacts(config)?;

    // 5. Packaging: one-file first, one-dir fallback on absence of output.
    println!("\nPackaging (see {})...", config.build_log().display());
    let t = Timer::start("packaging");
    let outcome = artifact::package_with_fallback(config, |mode| {
        artifact::run_pyinstaller(config, &venv, mode)
    })?;
    t.finish();

    let total = build_start.elapsed().as_secs_f64();
    println!("\n=== Build Complete ({:.1}s) ===", total);
    match &outcome {
        artifact::Outcome::OneFile(path) => {
            println!("  Executable: {}", path.display());
        }
        artifact::Outcome::OneDir(path) => {
            println!("  Executable: {} (one-dir fallback)", path.display());
            println!(
                "  Ship the whole {} directory.",
                config.dist_dir().join(cashpack::config::APP_NAME).display()
            );
        }
    }

    Ok(())
}

fn cmd_clean(config: &BuildConfig) -> Result<()> {
    artifact::clean_artifacts(config)?;
    println!("Removed dist/, build/ and {}", config.spec_file().display());
    Ok(())
}

fn cmd_check(config: &BuildConfig) -> Result<()> {
    let report = preflight::run_all(config);
    report.print_summary();

    if !report.is_ok() {
        anyhow::bail!("preflight checks failed");
    }
    Ok(())
}

fn cmd_status(config: &BuildConfig) -> Result<()> {
    println!("CashApp Builder Status");
    println!("======================");
    println!();

    println!("Project: {}", config.project_dir().display());
    println!();

    let found = |present: bool| if present { "FOUND" } else { "NOT FOUND" };

    println!("Inputs:");
    println!("  Entry script:  {} ({})", found(config.entry_script().exists()), config.entry_script().display());
    for name in cashpack::config::DATA_FILES {
        let path = config.project_dir().join(name);
        println!("  Data file:     {} ({})", found(path.exists()), path.display());
    }
    println!();

    println!("Environment:");
    println!("  venv:          {}", found(config.venv_python().exists()));
    println!();

    println!("Build Artifacts:");
    let onefile = config.onefile_output();
    let onedir = config.onedir_output();
    if onefile.exists() {
        let size = std::fs::metadata(&onefile).map(|m| m.len() / 1024 / 1024).unwrap_or(0);
        println!("  One-file exe:  BUILT ({} MB)", size);
    } else {
        println!("  One-file exe:  NOT BUILT");
    }
    if onedir.exists() {
        println!("  One-dir exe:   BUILT at {}", onedir.display());
    } else {
        println!("  One-dir exe:   NOT BUILT");
    }
    println!("  pip log:       {}", found(config.pip_log().exists()));
    println!("  build log:     {}", found(config.build_log().exists()));
    println!();

    println!("Next steps:");
    if !config.entry_script().exists() {
        println!("  1. Run from the CashApp project directory (app.py not found)");
    } else if onefile.exists() || onedir.exists() {
        println!("  Executable ready in {}.", config.dist_dir().display());
    } else {
        println!("  1. Run 'cashpack build' to produce the executable");
    }

    Ok(())
}
