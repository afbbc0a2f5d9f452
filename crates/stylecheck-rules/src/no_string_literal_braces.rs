//! Rule against redundant braces around string attribute values.

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, Rule, RuleContext, SeverityLevel, Violation,
};

/// Rule code for no-string-literal-braces.
pub const CODE: &str = "SC009";

/// Rule name for no-string-literal-braces.
pub const NAME: &str = "no-string-literal-braces";

/// Flags `prop={"text"}` where `prop="text"` suffices.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStringLiteralBraces;

impl Rule for NoStringLiteralBraces {
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
        "Forbids braces around plain string attribute values"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::JsxAttribute])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        // Only the braced form is redundant; prop="text" is the fix.
        let braced_literal = node.first_child().is_some_and(|v| {
            v.kind == NodeKind::JsxExpression
                && v.first_child().is_some_and(|inner| inner.kind == NodeKind::StringLiteral)
        });
        if !braced_literal {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!("braces around string literal; write {}=\"...\"", node.lexeme()),
        )]
    }
}
