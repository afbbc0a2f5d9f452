//! Rule against inline style objects.
//!
//! # Rationale
//!
//! An object literal in a `style` attribute is allocated on every render
//! and scatters presentation across markup. Styles belong in a
//! stylesheet or styled component.
//!
//! Mutually exclusive with `prefer-inline-style-dynamic`; enable one or
//! the other per project.

use crate::util::attribute_value;
use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, Rule, RuleContext, SeverityLevel, Violation,
};

/// Rule code for no-inline-style.
pub const CODE: &str = "SC005";

/// Rule name for no-inline-style.
pub const NAME: &str = "no-inline-style";

/// Flags `style` attributes carrying an object literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInlineStyle;

impl Rule for NoInlineStyle {
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
        "Forbids inline style objects on elements"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::JsxAttribute])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn conflicts_with(&self) -> &'static [&'static str] {
        &[crate::prefer_inline_style_dynamic::NAME]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        if node.lexeme() != "style" {
            return Vec::new();
        }
        let is_object = attribute_value(node).is_some_and(|v| v.kind == NodeKind::ObjectExpr);
        if !is_object {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            "inline style object; move it to a stylesheet or styled component",
        )]
    }
}
