//! fixture-builder CLI - inspect and reset fixture build state
//!
//! Usage: fixture-builder [-v] [--root DIR] [--config FILE] <COMMAND>
//!
//! Commands:
//!   status        Report whether fixtures would be rebuilt
//!   fingerprints  Print the current fingerprint of every tracked file
//!   reset         Forget persisted fingerprints so the next build rebuilds

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{cmd_fingerprints, cmd_reset, cmd_status, discover_project_root};

/// Environment variable holding an `EnvFilter` directive, e.g. `fixture_builder=debug`
const LOG_ENV: &str = "FIXTURE_BUILDER_LOG";

/// fixture-builder - staleness-gated test fixture generation
#[derive(Parser, Debug)]
#[command(name = "fixture-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root (discovered from the current directory by default)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Settings file to use instead of `<root>/fixture_builder.toml`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether fixtures would be rebuilt
    Status {
        /// Exit with code 1 when fixtures are stale
        #[arg(long)]
        check: bool,
    },

    /// Print the current fingerprint of every tracked file
    Fingerprints {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget persisted fingerprints so the next build rebuilds
    Reset,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            discover_project_root(&cwd)
        }
    };
    let config = cli.config.as_deref();
    tracing::debug!(root = %root.display(), "resolved project root");

    match cli.command {
        Commands::Status { check } => cmd_status(&root, config, check),
        Commands::Fingerprints { json } => {
            cmd_fingerprints(&root, config, json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Reset => cmd_reset(&root, config).map(|_| ExitCode::SUCCESS),
    }
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "fixture_builder=info,warn",
            2 => "fixture_builder=debug,info",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
