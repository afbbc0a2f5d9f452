//! Shared helpers for attribute-centric rules.

use stylecheck_core::{Node, NodeKind};

/// The value of a JSX attribute, unwrapping a braced expression
/// container when present.
///
/// `color="red"` yields the string literal directly; `style={{...}}`
/// yields the object expression inside the braces.
pub(crate) fn attribute_value(attr: &Node) -> Option<&Node> {
    let value = attr.first_child()?;
    if value.kind == NodeKind::JsxExpression {
        value.first_child()
    } else {
        Some(value)
    }
}

/// Whether an object literal contains only literal values, recursively.
pub(crate) fn is_static_object(obj: &Node) -> bool {
    obj.children_of(NodeKind::ObjectProperty).all(|prop| {
        prop.first_child().is_some_and(|value| match value.kind {
            NodeKind::StringLiteral | NodeKind::NumberLiteral | NodeKind::BooleanLiteral => true,
            NodeKind::ObjectExpr => is_static_object(value),
            _ => false,
        })
    })
}
