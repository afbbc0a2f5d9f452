//! Rule set resolution: registry + user configuration → effective,
//! immutable [`RuleSet`].
//!
//! Resolution is a pure function of its inputs: the same registry and
//! config always produce the same rule set, in registration order.

use crate::config::{Config, ConfigError};
use crate::node::NodeKind;
use crate::registry::RuleRegistry;
use crate::rule::{AppliesTo, OptionKind, OptionValue, RuleOptions};
use crate::types::Severity;
use std::collections::HashMap;

/// One enabled rule with its effective severity and resolved options.
#[derive(Debug)]
pub struct ResolvedRule {
    /// Index into the registry.
    pub index: usize,
    /// Effective severity for this run.
    pub severity: Severity,
    /// Options with defaults filled in.
    pub options: RuleOptions,
}

/// The effective rule set for one run.
///
/// Immutable once resolved; shared read-only across workers. Disabled
/// rules are absent entirely, so they cost nothing during traversal.
#[derive(Debug, Default)]
pub struct RuleSet {
    entries: Vec<ResolvedRule>,
    by_kind: HashMap<NodeKind, Vec<usize>>,
    unit_rules: Vec<usize>,
}

impl RuleSet {
    /// Enabled entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[ResolvedRule] {
        &self.entries
    }

    /// Entry at an index returned by the dispatch tables.
    #[must_use]
    pub fn entry(&self, index: usize) -> &ResolvedRule {
        &self.entries[index]
    }

    /// Entry indices of node-scoped rules applicable at `kind`,
    /// in registration order.
    #[must_use]
    pub fn rules_for(&self, kind: NodeKind) -> &[usize] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Entry indices of unit-scoped rules, in registration order.
    #[must_use]
    pub fn unit_rules(&self) -> &[usize] {
        &self.unit_rules
    }

    /// Whether a rule id is enabled in this set.
    #[must_use]
    pub fn is_enabled(&self, registry: &RuleRegistry, id: &str) -> bool {
        self.entries
            .iter()
            .any(|e| registry.get(e.index).id() == id)
    }
}

/// Resolves the effective rule set.
///
/// Unknown rule ids in configuration are warnings, or fatal under
/// `config.strict`. Options fall back to declared defaults; values that
/// fail their declared type, and option names no rule declares, are
/// fatal configuration errors naming the rule and option.
///
/// # Errors
///
/// Returns a [`ConfigError`] per the policy above.
pub fn resolve(registry: &RuleRegistry, config: &Config) -> Result<RuleSet, ConfigError> {
    for id in config.rules.keys() {
        if registry.lookup(id).is_none() {
            if config.strict {
                return Err(ConfigError::UnknownRule { id: id.clone() });
            }
            tracing::warn!("configuration references unknown rule id '{id}', ignoring");
        }
    }

    let mut ruleset = RuleSet::default();

    for (index, rule) in registry.iter().enumerate() {
        let setting = config.rules.get(rule.id());

        let level = setting
            .and_then(crate::config::RuleSetting::level)
            .unwrap_or_else(|| rule.default_severity());
        let Some(severity) = level.severity() else {
            tracing::debug!("rule '{}' is off", rule.id());
            continue;
        };

        let options = resolve_options(rule.id(), rule.options(), setting)?;

        let entry_index = ruleset.entries.len();
        ruleset.entries.push(ResolvedRule {
            index,
            severity,
            options,
        });

        match rule.applies_to() {
            AppliesTo::Unit => ruleset.unit_rules.push(entry_index),
            AppliesTo::Kinds(kinds) => {
                for kind in kinds {
                    ruleset.by_kind.entry(*kind).or_default().push(entry_index);
                }
            }
        }
    }

    tracing::debug!(
        "resolved rule set: {} of {} rules enabled",
        ruleset.entries.len(),
        registry.len()
    );

    Ok(ruleset)
}

fn resolve_options(
    rule_id: &str,
    specs: Vec<crate::rule::OptionSpec>,
    setting: Option<&crate::config::RuleSetting>,
) -> Result<RuleOptions, ConfigError> {
    let provided = setting.and_then(crate::config::RuleSetting::option_values);

    if let Some(values) = provided {
        for name in values.keys() {
            if !specs.iter().any(|s| s.name == name) {
                return Err(ConfigError::UnknownOption {
                    rule: rule_id.to_string(),
                    option: name.clone(),
                });
            }
        }
    }

    let mut resolved = HashMap::new();
    for spec in specs {
        let value = match provided.and_then(|v| v.get(spec.name)) {
            Some(raw) => convert_option(rule_id, spec.name, spec.kind, raw)?,
            None => spec.default,
        };
        resolved.insert(spec.name.to_string(), value);
    }

    Ok(RuleOptions::new(resolved))
}

fn convert_option(
    rule_id: &str,
    name: &str,
    kind: OptionKind,
    raw: &toml::Value,
) -> Result<OptionValue, ConfigError> {
    let invalid = || ConfigError::InvalidOption {
        rule: rule_id.to_string(),
        option: name.to_string(),
        expected: kind.to_string(),
    };

    match kind {
        OptionKind::Bool => raw.as_bool().map(OptionValue::Bool).ok_or_else(invalid),
        OptionKind::Int => raw.as_integer().map(OptionValue::Int).ok_or_else(invalid),
        OptionKind::Str => raw
            .as_str()
            .map(|s| OptionValue::Str(s.to_string()))
            .ok_or_else(invalid),
        OptionKind::StrList => {
            let array = raw.as_array().ok_or_else(invalid)?;
            let mut items = Vec::with_capacity(array.len());
            for item in array {
                items.push(item.as_str().ok_or_else(invalid)?.to_string());
            }
            Ok(OptionValue::StrList(items))
        }
    }
}
