//! Immutable catalog of rules, keyed by id.

use crate::config::ConfigError;
use crate::rule::{Rule, RuleBox};
use std::collections::HashMap;

/// Process-wide rule catalog.
///
/// Populated once at startup from the built-in rules (and any embedder
/// additions), read-only thereafter and shared freely across workers.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
    by_id: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRule`] if the id is already
    /// taken. Duplicate registration is a programming error and is never
    /// silently overwritten.
    pub fn register(&mut self, rule: RuleBox) -> Result<(), ConfigError> {
        let id = rule.id();
        if self.by_id.contains_key(id) {
            return Err(ConfigError::DuplicateRule { id: id.to_string() });
        }
        self.by_id.insert(id, self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Looks a rule up by id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&dyn Rule> {
        self.by_id.get(id).map(|&i| self.rules[i].as_ref())
    }

    /// Rule at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> &dyn Rule {
        self.rules[index].as_ref()
    }

    /// All rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
