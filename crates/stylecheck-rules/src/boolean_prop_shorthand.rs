//! Rule preferring the bare-attribute form over `={true}`.

use crate::util::attribute_value;
use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, Rule, RuleContext, SeverityLevel, Violation,
};

/// Rule code for boolean-prop-shorthand.
pub const CODE: &str = "SC008";

/// Rule name for boolean-prop-shorthand.
pub const NAME: &str = "boolean-prop-shorthand";

/// Flags `prop={true}` where bare `prop` means the same thing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanPropShorthand;

impl Rule for BooleanPropShorthand {
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
        "Prefers bare boolean attributes over an explicit ={true}"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::JsxAttribute])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        // `prop={false}` has no shorthand; only `true` is redundant.
        let is_true = attribute_value(node)
            .is_some_and(|v| v.kind == NodeKind::BooleanLiteral && v.lexeme() == "true");
        if !is_true {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!("'{0}={{true}}' can be written as bare '{0}'", node.lexeme()),
        )]
    }
}
