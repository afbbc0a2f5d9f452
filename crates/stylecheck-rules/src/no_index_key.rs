//! Rule against array indexes as list keys.
//!
//! # Rationale
//!
//! A key derived from the array index changes identity whenever the list
//! reorders, which breaks reconciliation and component state. Keys must
//! be stable identities of the data.
//!
//! # Configuration
//!
//! - `index_names`: identifiers treated as index-like
//!   (default: `["i", "idx", "index"]`)

use crate::util::attribute_value;
use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for no-index-key.
pub const CODE: &str = "SC003";

/// Rule name for no-index-key.
pub const NAME: &str = "no-index-key";

/// Flags `key={index}`-style attributes inside `.map(...)` chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndexKey;

impl Rule for NoIndexKey {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::AntiPattern
    }

    fn description(&self) -> &'static str {
        "Forbids array indexes as list keys inside .map() chains"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::JsxAttribute])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Error
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(
            "index_names",
            OptionValue::StrList(vec![
                "i".to_string(),
                "idx".to_string(),
                "index".to_string(),
            ]),
            "identifiers treated as index-like",
        )]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        if node.lexeme() != "key" {
            return Vec::new();
        }

        let Some(value) = attribute_value(node) else {
            return Vec::new();
        };
        if value.kind != NodeKind::Identifier {
            return Vec::new();
        }

        let name = value.lexeme();
        let index_like = ctx
            .options
            .get_str_list("index_names")
            .iter()
            .any(|n| n == name);
        if !index_like {
            return Vec::new();
        }

        // Only inside a .map() render chain; an index can be a fine key
        // for a truly static list elsewhere.
        if !ctx.has_ancestor(|n| n.kind == NodeKind::CallExpr && n.lexeme().contains("map")) {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!("'{name}' is an array index; use a stable id for the key"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stylecheck_core::{RuleOptions, Severity};

    fn key_attr(value_name: &str) -> Node {
        Node::new(NodeKind::JsxAttribute).with_text("key").with_child(
            Node::new(NodeKind::JsxExpression)
                .with_child(Node::new(NodeKind::Identifier).with_text(value_name)),
        )
    }

    fn check(node: &Node, ancestors: &[&Node]) -> Vec<Violation> {
        let options = RuleOptions::defaults(&NoIndexKey);
        let ctx = RuleContext {
            unit: Path::new("src/List.tsx"),
            ancestors,
            options: &options,
            severity: Severity::Error,
        };
        NoIndexKey.check(node, &ctx)
    }

    #[test]
    fn index_key_inside_map_is_flagged() {
        let unit = Node::new(NodeKind::Unit);
        let map_call = Node::new(NodeKind::CallExpr).with_text("items.map");
        let attr = key_attr("index");

        let violations = check(&attr, &[&unit, &map_call]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn stable_id_key_passes() {
        let unit = Node::new(NodeKind::Unit);
        let map_call = Node::new(NodeKind::CallExpr).with_text("items.map");
        let attr = key_attr("userId");

        assert!(check(&attr, &[&unit, &map_call]).is_empty());
    }

    #[test]
    fn index_key_outside_map_passes() {
        let unit = Node::new(NodeKind::Unit);
        let attr = key_attr("i");
        assert!(check(&attr, &[&unit]).is_empty());
    }

    #[test]
    fn non_key_attribute_is_ignored() {
        let unit = Node::new(NodeKind::Unit);
        let map_call = Node::new(NodeKind::CallExpr).with_text("items.map");
        let attr = Node::new(NodeKind::JsxAttribute).with_text("id").with_child(
            Node::new(NodeKind::JsxExpression)
                .with_child(Node::new(NodeKind::Identifier).with_text("index")),
        );
        assert!(check(&attr, &[&unit, &map_call]).is_empty());
    }
}
