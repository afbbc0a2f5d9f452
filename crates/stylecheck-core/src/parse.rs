//! Parser collaborator boundary.
//!
//! Turning source text into a tree is an external concern; the engine
//! only requires something implementing [`TreeParser`]. The shipped
//! implementation, [`JsonTreeParser`], loads trees a front-end has
//! already serialized to JSON (`*.tree.json`), so the checker pipeline
//! stays usable without embedding a source-language parser.

use crate::node::{Node, NodeKind};
use crate::types::Span;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single unit's source could not be turned into a tree.
///
/// Parse failures are per-unit fatal: the unit contributes zero
/// violations and is reported as failed, without aborting other units.
#[derive(Debug, Error)]
#[error("failed to parse {}: {message}", path.display())]
pub struct ParseError {
    /// Path of the offending unit.
    pub path: PathBuf,
    /// What went wrong.
    pub message: String,
    /// Where it went wrong, when the front-end can tell.
    pub span: Option<Span>,
}

impl ParseError {
    /// Creates a parse error for a unit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            span: None,
        }
    }

    /// Anchors the error at a source position.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Collaborator contract: file content + path in, tree or error out.
pub trait TreeParser: Send + Sync {
    /// Parses one unit's content into a tree rooted at a `Unit` node.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed input.
    fn parse(&self, path: &Path, content: &str) -> Result<Node, ParseError>;
}

/// Loads JSON-serialized trees produced by an external front-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl TreeParser for JsonTreeParser {
    fn parse(&self, path: &Path, content: &str) -> Result<Node, ParseError> {
        let root: Node = serde_json::from_str(content).map_err(|e| {
            ParseError::new(path, e.to_string())
                .with_span(Span::default().at(e.line(), e.column()))
        })?;

        if root.kind != NodeKind::Unit {
            return Err(ParseError::new(
                path,
                format!("tree root must be a Unit node, got {:?}", root.kind),
            )
            .with_span(root.span));
        }

        Ok(root)
    }
}
