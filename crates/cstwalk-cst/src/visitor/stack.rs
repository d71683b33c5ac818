// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The ancestor stack maintained by the traversal engine.

use crate::nodes::{NodeKind, SyntaxNode};

/// Nodes accepted on the path from the root to the node being visited.
///
/// The engine pushes a node when it accepts it and pops it once the node's
/// shape has finished, so during any event for node `n` the top of the stack is
/// `n` itself. Wrapper nodes that a shape skips are never pushed, which is why
/// [`parent`](Self::parent) can differ from the structural parent.
#[derive(Debug, Default, Clone)]
pub struct TraversalStack<'a> {
    frames: Vec<&'a SyntaxNode>,
}

impl<'a> TraversalStack<'a> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, node: &'a SyntaxNode) {
        self.frames.push(node);
    }

    pub(crate) fn pop(&mut self) -> Option<&'a SyntaxNode> {
        self.frames.pop()
    }

    /// The node currently being processed.
    pub fn current(&self) -> Option<&'a SyntaxNode> {
        self.frames.last().copied()
    }

    /// The nearest accepted ancestor of the current node.
    pub fn parent(&self) -> Option<&'a SyntaxNode> {
        self.ancestor(1)
    }

    /// The accepted ancestor `generations` levels above the current node.
    pub fn ancestor(&self, generations: usize) -> Option<&'a SyntaxNode> {
        let len = self.frames.len();
        len.checked_sub(generations + 1).map(|i| self.frames[i])
    }

    /// Kind of the parent, if any.
    pub fn parent_kind(&self) -> Option<NodeKind> {
        self.parent().map(SyntaxNode::kind)
    }

    /// Ancestors of the current node, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a SyntaxNode> + '_ {
        self.frames.iter().rev().skip(1).copied()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
