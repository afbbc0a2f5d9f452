//! Run orchestration: discovery, parallel per-unit checking, merge.
//!
//! Units are embarrassingly parallel: each worker owns one file's
//! read → parse → traverse pipeline end to end. The registry and the
//! resolved rule set are shared read-only; the aggregator is the single
//! merge barrier at the end.

use crate::aggregate::{Aggregator, RunReport, UnitReport, UnitStatus};
use crate::cancel::CancelToken;
use crate::config::{Config, ConfigError};
use crate::engine::{EngineError, TraversalEngine};
use crate::node::SourceUnit;
use crate::parse::{JsonTreeParser, TreeParser};
use crate::registry::RuleRegistry;
use crate::resolver::{resolve, RuleSet};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default discovery pattern for serialized trees.
const DEFAULT_INCLUDE: &str = "**/*.tree.json";

/// Errors that can occur while setting up or discovering a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// IO error during discovery.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error; fatal before any unit is processed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Builder for a [`Runner`].
pub struct RunnerBuilder {
    roots: Vec<PathBuf>,
    exclude_patterns: Vec<String>,
    config: Config,
    registry: RuleRegistry,
    parser: Box<dyn TreeParser>,
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            exclude_patterns: Vec::new(),
            config: Config::default(),
            registry: RuleRegistry::new(),
            parser: Box::new(JsonTreeParser),
        }
    }
}

impl RunnerBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file or directory to check.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the rule registry.
    #[must_use]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the parser collaborator (default: JSON tree loader).
    #[must_use]
    pub fn parser(mut self, parser: Box<dyn TreeParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Resolves the rule set and builds the runner.
    ///
    /// # Errors
    ///
    /// Returns a [`RunnerError::Config`] when rule-set resolution fails;
    /// nothing has been read or checked at that point.
    pub fn build(mut self) -> Result<Runner, RunnerError> {
        let ruleset = resolve(&self.registry, &self.config)?;

        if self.roots.is_empty() {
            self.roots.push(PathBuf::from("."));
        }
        self.exclude_patterns
            .extend(self.config.engine.exclude.iter().cloned());

        Ok(Runner {
            roots: self.roots,
            exclude_patterns: self.exclude_patterns,
            include_patterns: self.config.engine.include.clone(),
            max_depth: self.config.engine.max_depth,
            jobs: self.config.engine.jobs,
            registry: self.registry,
            ruleset,
            parser: self.parser,
        })
    }
}

/// Checks a set of source units against a resolved rule set.
pub struct Runner {
    roots: Vec<PathBuf>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    max_depth: usize,
    jobs: Option<usize>,
    registry: RuleRegistry,
    ruleset: RuleSet,
    parser: Box<dyn TreeParser>,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("roots", &self.roots)
            .field("exclude_patterns", &self.exclude_patterns)
            .field("include_patterns", &self.include_patterns)
            .field("max_depth", &self.max_depth)
            .field("jobs", &self.jobs)
            .field("ruleset", &self.ruleset)
            .finish_non_exhaustive()
    }
}

impl Runner {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Number of enabled rules in this run.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.ruleset.entries().len()
    }

    /// Runs the check over all discovered units.
    ///
    /// The final report is ordered by unit path regardless of worker
    /// completion order; a cancelled run retains completed units and is
    /// flagged partial.
    ///
    /// # Errors
    ///
    /// Returns an error only for discovery failures; per-unit parse and
    /// structural failures are isolated into the report.
    pub fn run(&self, token: &CancelToken) -> Result<RunReport, RunnerError> {
        let files = self.discover_files()?;
        info!("checking {} units with {} rules", files.len(), self.rule_count());

        let reports = match self.jobs {
            Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
                Ok(pool) => pool.install(|| self.check_all(&files, token)),
                Err(e) => {
                    warn!("failed to build worker pool ({e}), using default parallelism");
                    self.check_all(&files, token)
                }
            },
            None => self.check_all(&files, token),
        };

        let mut aggregator = Aggregator::new();
        for report in reports {
            aggregator.add(report);
        }
        if token.is_cancelled() {
            warn!("run cancelled; reporting partial results");
            aggregator.mark_partial();
        }

        Ok(aggregator.finish())
    }

    fn check_all(&self, files: &[PathBuf], token: &CancelToken) -> Vec<UnitReport> {
        files
            .par_iter()
            .filter_map(|path| {
                if token.is_cancelled() {
                    debug!("skipping {} after cancellation", path.display());
                    return None;
                }
                Some(self.check_file(path))
            })
            .collect()
    }

    /// Checks a single unit; all failures are isolated into its report.
    fn check_file(&self, path: &Path) -> UnitReport {
        debug!("checking {}", path.display());

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return UnitReport::failed(
                    path,
                    UnitStatus::ParseFailed {
                        message: e.to_string(),
                    },
                );
            }
        };

        let root = match self.parser.parse(path, &content) {
            Ok(root) => root,
            Err(e) => {
                warn!("{e}");
                return UnitReport::failed(
                    path,
                    UnitStatus::ParseFailed { message: e.message },
                );
            }
        };

        let unit = SourceUnit::new(path, root);
        let engine =
            TraversalEngine::new(&self.registry, &self.ruleset).with_max_depth(self.max_depth);

        match engine.check_unit(&unit) {
            Ok(violations) => UnitReport::checked(path, violations),
            Err(e @ EngineError::DepthExceeded { .. }) => {
                warn!("{e}");
                UnitReport::failed(path, UnitStatus::LimitExceeded)
            }
        }
    }

    /// Discovers all tree files under the configured roots.
    fn discover_files(&self) -> Result<Vec<PathBuf>, RunnerError> {
        let mut files = Vec::new();

        for root in &self.roots {
            if root.is_file() {
                files.push(root.clone());
                continue;
            }

            let includes: Vec<String> = if self.include_patterns.is_empty() {
                vec![DEFAULT_INCLUDE.to_string()]
            } else {
                self.include_patterns.clone()
            };

            for include in includes {
                let pattern = format!("{}/{include}", root.display());
                for entry in glob::glob(&pattern)? {
                    let path = entry.map_err(|e| RunnerError::Io(e.into_error()))?;
                    if self.should_exclude(&path) {
                        debug!("excluding {}", path.display());
                        continue;
                    }
                    files.push(path);
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Checks a path against the exclude patterns.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Patterns like "**/generated/**" also match as substrings.
            let normalized = pattern.replace("**", "");
            if !normalized.is_empty() && path_str.contains(&normalized) {
                return true;
            }
        }

        false
    }
}
