//! Rule to enforce identifier casing conventions.
//!
//! # Rationale
//!
//! Mixed casing styles make a codebase harder to scan: a reader should
//! know from the name alone whether something is a type, a function, or
//! a module-level constant.
//!
//! # Conventions
//!
//! - PascalCase for class, interface, type alias, enum, and component
//!   declarations
//! - camelCase for functions and variables
//! - UPPER_SNAKE for module-level constants; constants declared deeper
//!   follow camelCase
//!
//! # Configuration
//!
//! - `allow`: exact names exempted from all casing checks (default: empty)

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for naming-convention.
pub const CODE: &str = "SC001";

/// Rule name for naming-convention.
pub const NAME: &str = "naming-convention";

const KINDS: &[NodeKind] = &[
    NodeKind::ClassDecl,
    NodeKind::InterfaceDecl,
    NodeKind::TypeAliasDecl,
    NodeKind::EnumDecl,
    NodeKind::ComponentDecl,
    NodeKind::FunctionDecl,
    NodeKind::VariableDecl,
    NodeKind::ConstDecl,
];

/// Enforces casing conventions per declaration kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingConvention;

impl Rule for NamingConvention {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Naming
    }

    fn description(&self) -> &'static str {
        "Enforces PascalCase types, camelCase functions/variables, UPPER_SNAKE module constants"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(KINDS)
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Error
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(
            "allow",
            OptionValue::StrList(Vec::new()),
            "exact names exempt from casing checks",
        )]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let name = node.lexeme();
        if name.is_empty() || ctx.options.get_str_list("allow").iter().any(|a| a == name) {
            return Vec::new();
        }

        let expected = match node.kind {
            NodeKind::ClassDecl
            | NodeKind::InterfaceDecl
            | NodeKind::TypeAliasDecl
            | NodeKind::EnumDecl
            | NodeKind::ComponentDecl => Casing::Pascal,
            // Module-level constants only; nested ones read like variables.
            NodeKind::ConstDecl if ctx.ancestors.len() == 1 => Casing::UpperSnake,
            _ => Casing::Camel,
        };

        if expected.matches(name) {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!(
                "{} name '{name}' should be {expected}",
                kind_label(node.kind)
            ),
        )]
    }
}

#[derive(Debug, Clone, Copy)]
enum Casing {
    Pascal,
    Camel,
    UpperSnake,
}

impl Casing {
    fn matches(self, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        match self {
            Self::Pascal => {
                first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric())
            }
            Self::Camel => {
                first.is_ascii_lowercase() && chars.all(|c| c.is_ascii_alphanumeric())
            }
            Self::UpperSnake => {
                first.is_ascii_uppercase()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            }
        }
    }
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pascal => write!(f, "PascalCase"),
            Self::Camel => write!(f, "camelCase"),
            Self::UpperSnake => write!(f, "UPPER_SNAKE"),
        }
    }
}

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::ClassDecl => "class",
        NodeKind::InterfaceDecl => "interface",
        NodeKind::TypeAliasDecl => "type alias",
        NodeKind::EnumDecl => "enum",
        NodeKind::ComponentDecl => "component",
        NodeKind::FunctionDecl => "function",
        NodeKind::ConstDecl => "constant",
        _ => "variable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stylecheck_core::{RuleOptions, Severity};

    fn check(node: &Node, ancestors: &[&Node]) -> Vec<Violation> {
        let options = RuleOptions::defaults(&NamingConvention);
        let ctx = RuleContext {
            unit: Path::new("src/App.tsx"),
            ancestors,
            options: &options,
            severity: Severity::Error,
        };
        NamingConvention.check(node, &ctx)
    }

    #[test]
    fn lowercase_class_is_flagged() {
        let unit = Node::new(NodeKind::Unit);
        let node = Node::new(NodeKind::ClassDecl).with_text("myComponent");
        let violations = check(&node, &[&unit]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("PascalCase"));
    }

    #[test]
    fn pascal_component_passes() {
        let unit = Node::new(NodeKind::Unit);
        let node = Node::new(NodeKind::ComponentDecl).with_text("UserCard");
        assert!(check(&node, &[&unit]).is_empty());
    }

    #[test]
    fn snake_function_is_flagged() {
        let unit = Node::new(NodeKind::Unit);
        let node = Node::new(NodeKind::FunctionDecl).with_text("fetch_data");
        let violations = check(&node, &[&unit]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("camelCase"));
    }

    #[test]
    fn module_level_const_wants_upper_snake() {
        let unit = Node::new(NodeKind::Unit);
        let good = Node::new(NodeKind::ConstDecl).with_text("MAX_RETRIES");
        let bad = Node::new(NodeKind::ConstDecl).with_text("maxRetries");
        assert!(check(&good, &[&unit]).is_empty());
        assert_eq!(check(&bad, &[&unit]).len(), 1);
    }

    #[test]
    fn nested_const_follows_camel_case() {
        let unit = Node::new(NodeKind::Unit);
        let func = Node::new(NodeKind::FunctionDecl).with_text("useData");
        let node = Node::new(NodeKind::ConstDecl).with_text("localTotal");
        assert!(check(&node, &[&unit, &func]).is_empty());
    }

    #[test]
    fn allow_list_exempts_exact_name() {
        let options = RuleOptions::new(
            [(
                "allow".to_string(),
                OptionValue::StrList(vec!["legacy_helper".to_string()]),
            )]
            .into_iter()
            .collect(),
        );
        let unit = Node::new(NodeKind::Unit);
        let ancestors: &[&Node] = &[&unit];
        let ctx = RuleContext {
            unit: Path::new("src/App.tsx"),
            ancestors,
            options: &options,
            severity: Severity::Error,
        };
        let node = Node::new(NodeKind::FunctionDecl).with_text("legacy_helper");
        assert!(NamingConvention.check(&node, &ctx).is_empty());
    }
}
