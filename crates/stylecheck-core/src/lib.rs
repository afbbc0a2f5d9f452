//! # stylecheck-core
//!
//! Core engine for style checking over parsed syntax trees.
//!
//! This crate provides the foundational traits and types for building
//! style checkers. It includes:
//!
//! - [`Rule`] trait for node- and unit-scoped rules
//! - [`RuleRegistry`] and [`resolve`] for turning configuration into an
//!   effective rule set
//! - [`TraversalEngine`] for deterministic pre-order dispatch
//! - [`Runner`] for parallel multi-unit runs
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use stylecheck_core::{CancelToken, Runner};
//!
//! let runner = Runner::builder()
//!     .root("./src")
//!     .registry(my_registry())
//!     .build()?;
//!
//! let report = runner.run(&CancelToken::new())?;
//! println!("{}", report.outcome());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod cancel;
mod config;
mod engine;
mod node;
mod parse;
mod registry;
mod resolver;
mod rule;
mod runner;
mod types;

pub use aggregate::{
    sort_and_dedup, Aggregator, Outcome, RunReport, UnitReport, UnitStatus,
};
pub use cancel::CancelToken;
pub use config::{Config, ConfigError, EngineConfig, RuleSetting};
pub use engine::{EngineError, TraversalEngine, DEFAULT_MAX_DEPTH};
pub use node::{Node, NodeKind, SourceUnit};
pub use parse::{JsonTreeParser, ParseError, TreeParser};
pub use registry::RuleRegistry;
pub use resolver::{resolve, ResolvedRule, RuleSet};
pub use rule::{
    AppliesTo, Category, OptionKind, OptionSpec, OptionValue, Rule, RuleBox, RuleContext,
    RuleOptions,
};
pub use runner::{Runner, RunnerBuilder, RunnerError};
pub use types::{Severity, SeverityLevel, Span, Violation, ViolationDiagnostic};
