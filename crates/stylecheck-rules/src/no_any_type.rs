//! Rule against escape-hatch type annotations.
//!
//! # Configuration
//!
//! - `banned`: annotation texts to reject (default: `["any"]`)

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for no-any-type.
pub const CODE: &str = "SC006";

/// Rule name for no-any-type.
pub const NAME: &str = "no-any-type";

/// Flags banned type annotations such as `any`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnyType;

impl Rule for NoAnyType {
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
        "Forbids banned type annotations such as 'any'"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::TypeAnnotation])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Error
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(
            "banned",
            OptionValue::StrList(vec!["any".to_string()]),
            "annotation texts to reject",
        )]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let annotation = node.lexeme().trim();
        let banned = ctx
            .options
            .get_str_list("banned")
            .iter()
            .any(|b| b == annotation);
        if !banned {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!("type '{annotation}' defeats type checking; use a concrete type or 'unknown'"),
        )]
    }
}
