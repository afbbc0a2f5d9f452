//! Rule reserving inline styles for dynamic values.
//!
//! # Rationale
//!
//! The inverse convention of `no-inline-style`: teams that accept inline
//! styles for computed values still want fully static objects extracted,
//! since those never change between renders.
//!
//! Ships off by default and is mutually exclusive with `no-inline-style`;
//! enable one or the other per project.

use crate::util::{attribute_value, is_static_object};
use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, Rule, RuleContext, SeverityLevel, Violation,
};

/// Rule code for prefer-inline-style-dynamic.
pub const CODE: &str = "SC011";

/// Rule name for prefer-inline-style-dynamic.
pub const NAME: &str = "prefer-inline-style-dynamic";

/// Flags fully static inline style objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferInlineStyleDynamic;

impl Rule for PreferInlineStyleDynamic {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Style
    }

    fn description(&self) -> &'static str {
        "Reserves inline style objects for dynamic values; static ones are extracted"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::JsxAttribute])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Off
    }

    fn conflicts_with(&self) -> &'static [&'static str] {
        &[crate::no_inline_style::NAME]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        if node.lexeme() != "style" {
            return Vec::new();
        }
        let Some(value) = attribute_value(node) else {
            return Vec::new();
        };
        if value.kind != NodeKind::ObjectExpr || !is_static_object(value) {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            "static style object inline; extract it and keep inline style for dynamic values",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stylecheck_core::{RuleOptions, Severity};

    fn style_attr(value: Node) -> Node {
        Node::new(NodeKind::JsxAttribute)
            .with_text("style")
            .with_child(Node::new(NodeKind::JsxExpression).with_child(value))
    }

    fn check(node: &Node) -> Vec<Violation> {
        let options = RuleOptions::default();
        let ctx = RuleContext {
            unit: Path::new("src/App.tsx"),
            ancestors: &[],
            options: &options,
            severity: Severity::Warning,
        };
        PreferInlineStyleDynamic.check(node, &ctx)
    }

    #[test]
    fn static_style_object_is_flagged() {
        let obj = Node::new(NodeKind::ObjectExpr).with_child(
            Node::new(NodeKind::ObjectProperty)
                .with_text("color")
                .with_child(Node::new(NodeKind::StringLiteral).with_text("red")),
        );
        assert_eq!(check(&style_attr(obj)).len(), 1);
    }

    #[test]
    fn dynamic_style_object_passes() {
        let obj = Node::new(NodeKind::ObjectExpr).with_child(
            Node::new(NodeKind::ObjectProperty)
                .with_text("width")
                .with_child(Node::new(NodeKind::Identifier).with_text("progress")),
        );
        assert!(check(&style_attr(obj)).is_empty());
    }

    #[test]
    fn declares_conflict_with_counterpart() {
        assert_eq!(PreferInlineStyleDynamic.conflicts_with(), &["no-inline-style"]);
    }
}
