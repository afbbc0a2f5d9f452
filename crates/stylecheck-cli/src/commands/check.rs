//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stylecheck_core::{CancelToken, Config, Outcome, Runner, Severity};
use stylecheck_rules::builtin_registry;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of `stylecheck check`.
pub struct CheckArgs {
    /// Files or directories to check.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Warning budget; exceeding it fails the run.
    pub max_warnings: Option<usize>,
    /// Treat unknown rule ids as fatal.
    pub strict: bool,
    /// Worker count override.
    pub jobs: Option<usize>,
    /// Exclude patterns.
    pub exclude: Vec<String>,
    /// Explicit config path from `--config`.
    pub config: Option<PathBuf>,
}

/// Runs the check command.
///
/// # Errors
///
/// Returns an error for configuration or discovery failures; the caller
/// maps those to exit code 2 since no unit was checked.
pub fn run(args: &CheckArgs) -> Result<ExitCode> {
    let source = crate::config_resolver::locate(project_dir(&args.paths), args.config.as_deref());
    let mut config = load_config(&source)?;

    if args.strict {
        config.strict = true;
    }
    if args.jobs.is_some() {
        config.engine.jobs = args.jobs;
    }

    let mut builder = Runner::builder()
        .registry(builtin_registry())
        .config(config)
        .excludes(args.exclude.iter().cloned());
    for path in &args.paths {
        builder = builder.root(path);
    }
    let runner = builder.build().context("failed to resolve rule set")?;

    tracing::info!("checking {:?} with {} rules", args.paths, runner.rule_count());

    let report = runner.run(&CancelToken::new()).context("check failed")?;
    super::output::print(&report, args.format)?;

    let warnings = report.count(Severity::Warning);
    let over_budget = args.max_warnings.is_some_and(|max| warnings > max);

    Ok(match report.outcome() {
        Outcome::Failure => ExitCode::FAILURE,
        _ if over_budget => {
            eprintln!(
                "warning budget exceeded: {warnings} warning(s), at most {} allowed",
                args.max_warnings.unwrap_or(0)
            );
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    })
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if other.is_global() {
                tracing::info!("using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("failed to load config: {}", p.display()))
        }
    }
}

/// Directory the project-level config is looked up in: the first
/// directory argument, or the parent of the first file argument.
fn project_dir(paths: &[PathBuf]) -> &Path {
    paths
        .first()
        .map(|p| {
            if p.is_dir() {
                p.as_path()
            } else {
                p.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."))
            }
        })
        .unwrap_or(Path::new("."))
}
