//! Read-only view of a parsed syntax tree.
//!
//! The external front-end owns parsing; the engine consumes the tree it
//! produces through this minimal, immutable representation. The tree is
//! acyclic and rooted at exactly one [`NodeKind::Unit`] node per source
//! file; that invariant is the parser's contract and is not re-checked
//! during traversal.

use crate::types::Span;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Closed set of syntax element kinds the engine understands.
///
/// Front-ends map their own grammar onto these tags; anything without a
/// counterpart becomes [`NodeKind::Other`] and is still traversed so its
/// children stay reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Whole-file root node.
    Unit,
    /// Import statement; `text` holds the module specifier.
    Import,
    /// Default export declaration.
    ExportDefault,
    /// Class declaration; `text` holds the declared name.
    ClassDecl,
    /// Interface declaration.
    InterfaceDecl,
    /// Type alias declaration.
    TypeAliasDecl,
    /// Enum declaration.
    EnumDecl,
    /// Function declaration.
    FunctionDecl,
    /// UI component declaration.
    ComponentDecl,
    /// Variable declaration (`let`-like).
    VariableDecl,
    /// Constant declaration.
    ConstDecl,
    /// A single statement.
    Statement,
    /// A block of statements.
    Block,
    /// Call expression; `text` holds the callee path.
    CallExpr,
    /// Object literal expression.
    ObjectExpr,
    /// Property inside an object literal; `text` holds the key.
    ObjectProperty,
    /// JSX element; `text` holds the tag name.
    JsxElement,
    /// JSX attribute; `text` holds the attribute name, the value is the
    /// first child.
    JsxAttribute,
    /// Braced expression container inside JSX.
    JsxExpression,
    /// Identifier reference.
    Identifier,
    /// String literal; `text` holds the unquoted value.
    StringLiteral,
    /// Numeric literal.
    NumberLiteral,
    /// Boolean literal; `text` is `"true"` or `"false"`.
    BooleanLiteral,
    /// Type annotation; `text` holds the annotation source.
    TypeAnnotation,
    /// Anything the front-end has no closer tag for.
    Other,
}

/// One immutable syntax element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element kind.
    pub kind: NodeKind,
    /// Source span.
    #[serde(default)]
    pub span: Span,
    /// Raw lexeme, where meaningful for the kind.
    #[serde(default)]
    pub text: Option<String>,
    /// Ordered children; the parent owns them exclusively.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            span: Span::default(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets the lexeme.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Lexeme, or the empty string when absent.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// First child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Children of a specific kind, in order.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Counts descendants (excluding `self`) of a specific kind.
    ///
    /// Iterative so that rules can call it on arbitrarily deep trees;
    /// the front-end's nesting depth must not bound a count.
    #[must_use]
    pub fn count_descendants(&self, kind: NodeKind) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += usize::from(node.kind == kind);
            stack.extend(node.children.iter());
        }
        count
    }
}

/// One input file's parsed tree plus its identity.
///
/// Created per file, consumed read-only, discarded after its violations
/// are collected. No cross-file state is retained.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Identifying path of the unit.
    pub path: PathBuf,
    /// Root of the parsed tree; always [`NodeKind::Unit`].
    pub root: Node,
}

impl SourceUnit {
    /// Creates a source unit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, root: Node) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }
}
