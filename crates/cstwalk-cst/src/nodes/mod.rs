// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree nodes.
//!
//! Nodes are produced by an external parser, either directly through the
//! builder methods here or by deserializing JSON. They carry no behavior and no
//! parent pointer; the traversal engine reconstructs ancestry while it walks.

mod kind;
mod span;

pub(crate) use kind::for_each_node_kind;
pub use kind::NodeKind;
pub use span::{Position, Span};

use serde::{Deserialize, Serialize};

/// An immutable element of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(default)]
    span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A node with no text, no children and a synthetic span.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    /// A leaf carrying literal text, e.g. an identifier or number.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(kind)
        }
    }

    /// Sets the children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Sets a zero-width span at `line:column`.
    #[must_use]
    pub fn at(self, line: u32, column: u32) -> Self {
        self.with_span(Span::point(line, column))
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// The child at `index`, if present.
    pub fn child_at(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    /// The first child of the given kind.
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut work = vec![self];
        while let Some(node) = work.pop() {
            count += 1;
            work.extend(node.children.iter());
        }
        count
    }
}
