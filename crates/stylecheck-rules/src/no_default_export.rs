//! Rule against default exports; named exports refactor and grep better.

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, Rule, RuleContext, SeverityLevel, Violation,
};

/// Rule code for no-default-export.
pub const CODE: &str = "SC004";

/// Rule name for no-default-export.
pub const NAME: &str = "no-default-export";

/// Flags default export declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaultExport;

impl Rule for NoDefaultExport {
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
        "Forbids default exports in favor of named exports"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::ExportDefault])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        vec![ctx.violation(
            self,
            node.span,
            "default export; use a named export so the name survives imports",
        )]
    }
}
