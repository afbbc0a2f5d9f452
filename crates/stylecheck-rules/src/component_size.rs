//! Rule limiting component size.
//!
//! # Rationale
//!
//! A component that accumulates statements accumulates responsibilities.
//! The cap is a prompt to extract hooks or child components, not a hard
//! law of design, so it ships as a warning.
//!
//! # Configuration
//!
//! - `max_statements`: statement cap per component (default: 50)

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for component-size.
pub const CODE: &str = "SC007";

/// Rule name for component-size.
pub const NAME: &str = "component-size";

/// Flags components whose statement count exceeds the cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentSize;

impl Rule for ComponentSize {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn description(&self) -> &'static str {
        "Limits the number of statements in a component"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::ComponentDecl])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(
            "max_statements",
            OptionValue::Int(50),
            "statement cap per component",
        )]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let max = ctx.options.get_int("max_statements", 50);
        let count = node.count_descendants(NodeKind::Statement) as i64;
        if count <= max {
            return Vec::new();
        }

        let name = if node.lexeme().is_empty() {
            "component".to_string()
        } else {
            format!("component '{}'", node.lexeme())
        };
        vec![ctx.violation(
            self,
            node.span,
            format!("{name} has {count} statements (limit {max}); extract hooks or children"),
        )]
    }
}
