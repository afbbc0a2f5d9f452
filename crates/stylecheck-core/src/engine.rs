//! Traversal engine: depth-first, rule-indexed dispatch over one unit.
//!
//! Unit-scoped rules run first, against the root, so whole-file
//! violations are reported ahead of node-level ones. Node-scoped rules
//! are dispatched only at nodes whose kind they registered for, using
//! the index the resolver built. The engine owns the ancestor stack;
//! rules inspect it through [`RuleContext`] without ever seeing mutable
//! tree state.

use crate::node::{Node, SourceUnit};
use crate::registry::RuleRegistry;
use crate::resolver::RuleSet;
use crate::rule::RuleContext;
use crate::types::{Severity, Violation};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default traversal depth cap.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Structural limit failures during traversal.
///
/// Treated like a parse error for the unit: isolated, non-fatal to the
/// run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The unit's tree is deeper than the configured cap; either the
    /// front-end produced a pathological tree or the cap is too low.
    #[error("unit {unit} exceeded traversal depth limit of {limit}")]
    DepthExceeded {
        /// Offending unit path.
        unit: PathBuf,
        /// The configured cap.
        limit: usize,
    },
}

/// Dispatches applicable rules over a unit's tree.
pub struct TraversalEngine<'a> {
    registry: &'a RuleRegistry,
    ruleset: &'a RuleSet,
    max_depth: usize,
}

impl<'a> TraversalEngine<'a> {
    /// Creates an engine over a registry and resolved rule set.
    #[must_use]
    pub fn new(registry: &'a RuleRegistry, ruleset: &'a RuleSet) -> Self {
        Self {
            registry,
            ruleset,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the traversal depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks one source unit, returning its violations in dispatch
    /// order (callers sort for reporting).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DepthExceeded`] when the tree is deeper
    /// than the configured cap.
    pub fn check_unit(&self, unit: &SourceUnit) -> Result<Vec<Violation>, EngineError> {
        let mut violations = Vec::new();

        // Whole-file rules first, by convention.
        self.dispatch(
            self.ruleset.unit_rules(),
            &unit.path,
            &unit.root,
            &[],
            &mut violations,
        );

        let mut ancestors: Vec<&Node> = Vec::new();
        self.visit(&unit.path, &unit.root, &mut ancestors, 1, &mut violations)?;

        Ok(violations)
    }

    fn visit<'n>(
        &self,
        path: &Path,
        node: &'n Node,
        ancestors: &mut Vec<&'n Node>,
        depth: usize,
        out: &mut Vec<Violation>,
    ) -> Result<(), EngineError> {
        if depth > self.max_depth {
            return Err(EngineError::DepthExceeded {
                unit: path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        self.dispatch(self.ruleset.rules_for(node.kind), path, node, ancestors, out);

        ancestors.push(node);
        for child in &node.children {
            self.visit(path, child, ancestors, depth + 1, out)?;
        }
        ancestors.pop();

        Ok(())
    }

    /// Invokes the given rule entries at one node.
    ///
    /// A rule that faults is captured per invocation and converted into
    /// a synthetic internal-rule-error violation; one misbehaving rule
    /// never takes down the unit or the run.
    fn dispatch(
        &self,
        entry_indices: &[usize],
        path: &Path,
        node: &Node,
        ancestors: &[&Node],
        out: &mut Vec<Violation>,
    ) {
        let mut fired: Vec<&'static str> = Vec::new();

        for &entry_index in entry_indices {
            let entry = self.ruleset.entry(entry_index);
            let rule = self.registry.get(entry.index);

            if rule
                .conflicts_with()
                .iter()
                .any(|other| fired.contains(other))
            {
                continue;
            }

            let ctx = RuleContext {
                unit: path,
                ancestors,
                options: &entry.options,
                severity: entry.severity,
            };

            match catch_unwind(AssertUnwindSafe(|| rule.check(node, &ctx))) {
                Ok(found) => {
                    if !found.is_empty() {
                        fired.push(rule.id());
                    }
                    out.extend(found);
                }
                Err(payload) => {
                    let detail = panic_message(payload.as_ref());
                    tracing::warn!(
                        "rule '{}' faulted at {}:{}: {detail}",
                        rule.id(),
                        path.display(),
                        node.span.start,
                    );
                    out.push(Violation::new(
                        rule.code(),
                        rule.id(),
                        Severity::Error,
                        node.span,
                        path,
                        format!("internal rule error: '{}' faulted: {detail}", rule.id()),
                    ));
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
