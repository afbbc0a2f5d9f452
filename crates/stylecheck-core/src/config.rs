//! Configuration types.
//!
//! The engine receives an already-parsed [`Config`]; file loading lives
//! here only as a convenience for the CLI shell. A rule entry is either
//! a bare level (`"off" | "warn" | "error"`) or a table carrying a
//! severity and rule-specific options.

use crate::types::SeverityLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// When true, unknown rule ids in `[rules]` are fatal configuration
    /// errors instead of warnings.
    #[serde(default)]
    pub strict: bool,

    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Per-rule settings keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleSetting>,
}

impl Config {
    /// Creates an all-defaults configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Engine-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum traversal depth before a unit fails with a structural
    /// limit error. Defends against pathological trees from the parser.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Worker count for parallel unit checking (default: available
    /// parallelism).
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Glob patterns excluded from discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns to include (default: `**/*.tree.json`).
    #[serde(default)]
    pub include: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            jobs: None,
            exclude: Vec::new(),
            include: Vec::new(),
        }
    }
}

fn default_max_depth() -> usize {
    128
}

/// Configured state of one rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    /// Bare level: `"off" | "warn" | "error"`.
    Level(SeverityLevel),
    /// Table form with optional severity and rule-specific options.
    Detailed {
        /// Severity override; descriptor default when absent.
        #[serde(default)]
        severity: Option<SeverityLevel>,
        /// Rule-specific options, validated against the declared specs.
        #[serde(flatten)]
        options: HashMap<String, toml::Value>,
    },
}

impl RuleSetting {
    /// The configured severity level, if any.
    #[must_use]
    pub fn level(&self) -> Option<SeverityLevel> {
        match self {
            Self::Level(l) => Some(*l),
            Self::Detailed { severity, .. } => *severity,
        }
    }

    /// The configured options, empty for the bare form.
    #[must_use]
    pub fn option_values(&self) -> Option<&HashMap<String, toml::Value>> {
        match self {
            Self::Level(_) => None,
            Self::Detailed { options, .. } => Some(options),
        }
    }
}

/// Configuration errors. All of these are run-fatal and reported before
/// any unit is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule id was registered twice; a programming error in the
    /// catalog, fatal at startup.
    #[error("rule id '{id}' registered twice")]
    DuplicateRule {
        /// The colliding rule id.
        id: String,
    },

    /// Configuration referenced a rule id the registry does not know,
    /// under strict mode.
    #[error("unknown rule id '{id}' in configuration")]
    UnknownRule {
        /// The unknown rule id.
        id: String,
    },

    /// Configuration provided an option the rule does not declare.
    #[error("rule '{rule}' has no option named '{option}'")]
    UnknownOption {
        /// Rule id.
        rule: String,
        /// Offending option name.
        option: String,
    },

    /// An option value did not match its declared type.
    #[error("option '{option}' of rule '{rule}' must be a {expected}")]
    InvalidOption {
        /// Rule id.
        rule: String,
        /// Offending option name.
        option: String,
        /// Expected type, per the declared spec.
        expected: String,
    },
}
