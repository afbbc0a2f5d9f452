//! Core types for violations and severities.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be addressed but does not fail the run on its own.
    Warning,
    /// Must be fixed; any error fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configured level for a rule: a severity or "off".
///
/// `off` exists only at configuration level; a disabled rule is never
/// invoked, so no violation ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Rule disabled.
    Off,
    /// Report as warning.
    Warn,
    /// Report as error.
    Error,
}

impl SeverityLevel {
    /// Converts to a violation severity, or `None` when off.
    #[must_use]
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Byte span of a syntax element, with the 1-indexed position the
/// front-end recorded for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number (1-indexed, 0 if unknown).
    #[serde(default)]
    pub line: usize,
    /// Column number (1-indexed, 0 if unknown).
    #[serde(default)]
    pub column: usize,
}

impl Span {
    /// Creates a span from byte offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            line: 0,
            column: 0,
        }
    }

    /// Sets the 1-indexed line/column position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Span length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for a zero-length span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A single style-conformance violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SC001").
    pub code: String,
    /// Rule id (e.g., "naming-convention").
    pub rule: String,
    /// Effective severity for this run.
    pub severity: Severity,
    /// Span of the offending node.
    pub span: Span,
    /// Path of the source unit the violation belongs to.
    pub unit: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting a fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        span: Span,
        unit: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            span,
            unit: unit.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Adds help text to this violation.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.span.line > 0 {
            write!(
                f,
                "{}:{}:{}: {} [{}] {}",
                self.unit.display(),
                self.span.line,
                self.span.column,
                self.severity,
                self.code,
                self.message
            )
        } else {
            write!(
                f,
                "{}:{}..{}: {} [{}] {}",
                self.unit.display(),
                self.span.start,
                self.span.end,
                self.severity,
                self.code,
                self.message
            )
        }
    }
}

/// Converts a [`Violation`] into a miette diagnostic for rich display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.help.clone(),
            span: SourceSpan::from((v.span.start, v.span.len())),
            label: v.rule.clone(),
        }
    }
}
