//! stylecheck CLI tool.
//!
//! Usage:
//! ```bash
//! stylecheck check [OPTIONS] [PATHS]...
//! stylecheck list-rules
//! stylecheck init
//! ```
//!
//! Exit codes: 0 on success, 1 when the check fails (error violations,
//! failed units, or the warning budget exceeded), 2 on configuration
//! errors raised before any unit is processed.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Style-conformance checker over parsed syntax trees
#[derive(Parser)]
#[command(name = "stylecheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check source trees for style violations
    Check {
        /// Files or directories to check (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Fail the run when warnings exceed this count
        #[arg(long)]
        max_warnings: Option<usize>,

        /// Treat unknown rule ids in configuration as fatal
        #[arg(long)]
        strict: bool,

        /// Number of parallel workers (default: available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            paths,
            format,
            max_warnings,
            strict,
            jobs,
            exclude,
        } => commands::check::run(&commands::check::CheckArgs {
            paths,
            format,
            max_warnings,
            strict,
            jobs,
            exclude,
            config: cli.config,
        }),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            // Setup failures land here; nothing was checked.
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
