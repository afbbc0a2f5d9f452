//! The built-in rule catalog.

use crate::{
    BooleanPropShorthand, ComponentSize, ImportOrder, NamingConvention, NoAnyType,
    NoDefaultExport, NoIndexKey, NoInlineStyle, NoLiteralColor, NoStringLiteralBraces,
    PreferInlineStyleDynamic,
};
use stylecheck_core::{RuleBox, RuleRegistry};

/// All built-in rules, in catalog (code) order.
///
/// Registration order is dispatch order, so this ordering is part of the
/// output contract.
#[must_use]
pub fn builtin_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NamingConvention),
        Box::new(ImportOrder),
        Box::new(NoIndexKey),
        Box::new(NoDefaultExport),
        Box::new(NoInlineStyle),
        Box::new(NoAnyType),
        Box::new(ComponentSize),
        Box::new(BooleanPropShorthand),
        Box::new(NoStringLiteralBraces),
        Box::new(NoLiteralColor),
        Box::new(PreferInlineStyleDynamic),
    ]
}

/// A registry populated with the built-in catalog.
#[must_use]
pub fn builtin_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for rule in builtin_rules() {
        let id = rule.id();
        if let Err(e) = registry.register(rule) {
            // Built-in ids are unique; this would be a catalog bug.
            tracing::error!("failed to register built-in rule '{id}': {e}");
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_registers_completely() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), builtin_rules().len());
    }

    #[test]
    fn codes_and_ids_are_unique() {
        let rules = builtin_rules();
        let ids: HashSet<&str> = rules.iter().map(|r| r.id()).collect();
        let codes: HashSet<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(ids.len(), rules.len());
        assert_eq!(codes.len(), rules.len());
    }

    #[test]
    fn conflicts_reference_registered_rules() {
        let registry = builtin_registry();
        for rule in registry.iter() {
            for conflict in rule.conflicts_with() {
                assert!(
                    registry.lookup(conflict).is_some(),
                    "rule '{}' conflicts with unregistered '{conflict}'",
                    rule.id()
                );
            }
        }
    }

    #[test]
    fn catalog_order_is_code_order() {
        let rules = builtin_rules();
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }
}
