//! Violation aggregation and the run report.
//!
//! The aggregator is the single merge point after parallel workers
//! finish: it sorts each unit's violations by `(span.start, rule)` for
//! reproducible output, drops exact duplicates, orders units by path
//! independent of completion order, and computes the run's 3-state
//! outcome. The [`RunReport`] is the sole payload handed to external
//! formatters and the exit-code mapper.

use crate::types::{Severity, Violation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// No violations, all units checked, run complete.
    Success,
    /// Only warnings, or a partial run with nothing worse.
    Warning,
    /// At least one error violation or one failed unit.
    Failure,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Terminal state of one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    /// Parsed and traversed; violations (possibly none) collected.
    Checked,
    /// The parser collaborator rejected the unit.
    ParseFailed {
        /// Parser's message.
        message: String,
    },
    /// The tree exceeded the traversal depth cap.
    LimitExceeded,
}

/// One unit's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    /// Unit path.
    pub unit: PathBuf,
    /// How the unit ended.
    pub status: UnitStatus,
    /// Ordered, deduplicated violations.
    pub violations: Vec<Violation>,
}

impl UnitReport {
    /// Creates a checked unit report from raw engine output.
    #[must_use]
    pub fn checked(unit: impl Into<PathBuf>, mut violations: Vec<Violation>) -> Self {
        sort_and_dedup(&mut violations);
        Self {
            unit: unit.into(),
            status: UnitStatus::Checked,
            violations,
        }
    }

    /// Creates a failed unit report (parse or structural failure).
    #[must_use]
    pub fn failed(unit: impl Into<PathBuf>, status: UnitStatus) -> Self {
        Self {
            unit: unit.into(),
            status,
            violations: Vec::new(),
        }
    }

    /// True unless the unit was fully checked.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status != UnitStatus::Checked
    }
}

/// Sorts by `(span.start, rule)` and drops exact duplicates.
pub fn sort_and_dedup(violations: &mut Vec<Violation>) {
    violations.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then_with(|| a.rule.cmp(&b.rule))
    });
    violations.dedup_by(|a, b| {
        a.rule == b.rule && a.span.start == b.span.start && a.message == b.message
    });
}

/// Full results of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Per-unit reports, ordered by unit path.
    pub units: Vec<UnitReport>,
    /// True when the run was cancelled before completing every unit;
    /// a partial run is never reported as Success.
    pub partial: bool,
}

impl RunReport {
    /// Number of units that were fully checked.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.units.iter().filter(|u| !u.is_failed()).count()
    }

    /// Number of units that failed (parse or structural limit).
    #[must_use]
    pub fn files_failed(&self) -> usize {
        self.units.iter().filter(|u| u.is_failed()).count()
    }

    /// All violations across units, in report order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.units.iter().flat_map(|u| u.violations.iter())
    }

    /// Counts violations at a severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.violations().filter(|v| v.severity == severity).count()
    }

    /// The run's aggregate outcome.
    ///
    /// Any error violation or failed unit is a Failure; warnings or a
    /// partial run degrade Success to Warning.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.count(Severity::Error) > 0 || self.files_failed() > 0 {
            Outcome::Failure
        } else if self.count(Severity::Warning) > 0 || self.partial {
            Outcome::Warning
        } else {
            Outcome::Success
        }
    }
}

/// Collects unit reports into a [`RunReport`].
///
/// This is the only cross-worker synchronization point; each worker
/// owns its unit until it is handed over here.
#[derive(Debug, Default)]
pub struct Aggregator {
    units: Vec<UnitReport>,
    partial: bool,
}

impl Aggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit's report.
    pub fn add(&mut self, report: UnitReport) {
        self.units.push(report);
    }

    /// Marks the run as cancelled before completion.
    pub fn mark_partial(&mut self) {
        self.partial = true;
    }

    /// Finalizes into a report ordered by unit path, independent of the
    /// completion order of parallel workers.
    #[must_use]
    pub fn finish(mut self) -> RunReport {
        self.units.sort_by(|a, b| a.unit.cmp(&b.unit));
        RunReport {
            units: self.units,
            partial: self.partial,
        }
    }
}
