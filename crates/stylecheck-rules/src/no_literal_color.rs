//! Rule against hard-coded colors in style objects.
//!
//! # Rationale
//!
//! Colors spelled out at the point of use drift from the project
//! palette and survive redesigns. The palette is declared explicitly
//! through the `allowed` option; anything else literal is flagged.
//!
//! Ships off by default: only projects with a declared palette want it.
//!
//! # Configuration
//!
//! - `properties`: property keys treated as color-bearing
//! - `allowed`: literal values accepted anyway (the palette)

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for no-literal-color.
pub const CODE: &str = "SC010";

/// Rule name for no-literal-color.
pub const NAME: &str = "no-literal-color";

const DEFAULT_PROPERTIES: &[&str] = &[
    "color",
    "background",
    "backgroundColor",
    "borderColor",
    "outlineColor",
    "fill",
    "stroke",
];

/// Flags literal color values on color-bearing style properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLiteralColor;

impl Rule for NoLiteralColor {
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
        "Forbids literal color values outside the configured palette"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Kinds(&[NodeKind::ObjectProperty])
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Off
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::new(
                "properties",
                OptionValue::StrList(
                    DEFAULT_PROPERTIES.iter().map(ToString::to_string).collect(),
                ),
                "property keys treated as color-bearing",
            ),
            OptionSpec::new(
                "allowed",
                OptionValue::StrList(Vec::new()),
                "literal values accepted anyway",
            ),
        ]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let key = node.lexeme();
        let color_bearing = ctx
            .options
            .get_str_list("properties")
            .iter()
            .any(|p| p == key);
        if !color_bearing || !in_style_object(ctx) {
            return Vec::new();
        }

        let Some(value) = node.first_child() else {
            return Vec::new();
        };
        if value.kind != NodeKind::StringLiteral || !is_color_literal(value.lexeme()) {
            return Vec::new();
        }
        if ctx
            .options
            .get_str_list("allowed")
            .iter()
            .any(|a| a.eq_ignore_ascii_case(value.lexeme()))
        {
            return Vec::new();
        }

        vec![ctx.violation(
            self,
            node.span,
            format!(
                "literal color '{}' for '{key}'; use a palette token",
                value.lexeme()
            ),
        )]
    }
}

/// A style object is either a `style` attribute value or a declaration
/// whose name mentions style.
fn in_style_object(ctx: &RuleContext<'_>) -> bool {
    ctx.has_ancestor(|n| match n.kind {
        NodeKind::JsxAttribute => n.lexeme() == "style",
        NodeKind::ConstDecl | NodeKind::VariableDecl => {
            n.lexeme().to_ascii_lowercase().contains("style")
        }
        _ => false,
    })
}

fn is_color_literal(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    v.starts_with('#')
        || v.starts_with("rgb(")
        || v.starts_with("rgba(")
        || v.starts_with("hsl(")
        || v.starts_with("hsla(")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stylecheck_core::{RuleOptions, Severity};

    fn color_property(key: &str, value: &str) -> Node {
        Node::new(NodeKind::ObjectProperty)
            .with_text(key)
            .with_child(Node::new(NodeKind::StringLiteral).with_text(value))
    }

    fn check_in_style_attr(node: &Node, options: &RuleOptions) -> Vec<Violation> {
        let unit = Node::new(NodeKind::Unit);
        let attr = Node::new(NodeKind::JsxAttribute).with_text("style");
        let obj = Node::new(NodeKind::ObjectExpr);
        let ancestors: Vec<&Node> = vec![&unit, &attr, &obj];
        let ctx = RuleContext {
            unit: Path::new("src/App.tsx"),
            ancestors: &ancestors,
            options,
            severity: Severity::Warning,
        };
        NoLiteralColor.check(node, &ctx)
    }

    #[test]
    fn hex_color_is_flagged() {
        let options = RuleOptions::defaults(&NoLiteralColor);
        let violations = check_in_style_attr(&color_property("color", "#ff0000"), &options);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("palette token"));
    }

    #[test]
    fn rgb_and_hsl_are_flagged() {
        let options = RuleOptions::defaults(&NoLiteralColor);
        assert_eq!(
            check_in_style_attr(&color_property("backgroundColor", "rgb(0, 0, 0)"), &options)
                .len(),
            1
        );
        assert_eq!(
            check_in_style_attr(&color_property("fill", "hsl(120, 50%, 50%)"), &options).len(),
            1
        );
    }

    #[test]
    fn palette_member_passes() {
        let options = RuleOptions::new(
            [
                (
                    "properties".to_string(),
                    OptionValue::StrList(vec!["color".to_string()]),
                ),
                (
                    "allowed".to_string(),
                    OptionValue::StrList(vec!["#FF0000".to_string()]),
                ),
            ]
            .into_iter()
            .collect(),
        );
        assert!(check_in_style_attr(&color_property("color", "#ff0000"), &options).is_empty());
    }

    #[test]
    fn named_color_token_passes() {
        let options = RuleOptions::defaults(&NoLiteralColor);
        assert!(
            check_in_style_attr(&color_property("color", "var(--brand)"), &options).is_empty()
        );
    }

    #[test]
    fn non_color_property_passes() {
        let options = RuleOptions::defaults(&NoLiteralColor);
        assert!(check_in_style_attr(&color_property("width", "#100"), &options).is_empty());
    }

    #[test]
    fn outside_style_object_passes() {
        let options = RuleOptions::defaults(&NoLiteralColor);
        let unit = Node::new(NodeKind::Unit);
        let obj = Node::new(NodeKind::ObjectExpr);
        let ancestors: Vec<&Node> = vec![&unit, &obj];
        let ctx = RuleContext {
            unit: Path::new("src/App.tsx"),
            ancestors: &ancestors,
            options: &options,
            severity: Severity::Warning,
        };
        let node = color_property("color", "#ff0000");
        assert!(NoLiteralColor.check(&node, &ctx).is_empty());
    }
}
