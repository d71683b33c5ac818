// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Flattened, index-addressable view of a syntax forest.
//!
//! Nodes own their children but know nothing about their parent or siblings.
//! The traversals need both, so [`TreeIndex`] assigns every reachable node a
//! [`NodeId`] in preorder and records the links once up front.

use crate::nodes::SyntaxNode;

/// Position of a node in preorder encounter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Entry<'a> {
    node: &'a SyntaxNode,
    parent: Option<NodeId>,
    next_sibling: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct TreeIndex<'a> {
    entries: Vec<Entry<'a>>,
    roots: Vec<NodeId>,
}

impl<'a> TreeIndex<'a> {
    /// Indexes `roots` and everything below them.
    ///
    /// Top-level nodes are siblings of each other, as if they shared an
    /// invisible parent.
    pub fn build(roots: &'a [SyntaxNode]) -> Self {
        let capacity = roots.iter().map(SyntaxNode::subtree_len).sum();
        let mut index = Self {
            entries: Vec::with_capacity(capacity),
            roots: Vec::with_capacity(roots.len()),
        };

        // Explicit work list so deep trees cannot overflow the native stack
        // during indexing.
        let mut work: Vec<(&'a SyntaxNode, Option<NodeId>)> =
            roots.iter().rev().map(|r| (r, None)).collect();
        while let Some((node, parent)) = work.pop() {
            let id = NodeId(index.entries.len());
            index.entries.push(Entry {
                node,
                parent,
                next_sibling: None,
                children: Vec::with_capacity(node.children().len()),
            });
            match parent {
                Some(p) => index.entries[p.0].children.push(id),
                None => index.roots.push(id),
            }
            work.extend(node.children().iter().rev().map(|c| (c, Some(id))));
        }

        index.link_siblings();
        index
    }

    fn link_siblings(&mut self) {
        for pair in self.roots.windows(2) {
            self.entries[pair[0].0].next_sibling = Some(pair[1]);
        }
        for i in 0..self.entries.len() {
            for k in 1..self.entries[i].children.len() {
                let (a, b) = (self.entries[i].children[k - 1], self.entries[i].children[k]);
                self.entries[a.0].next_sibling = Some(b);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &'a SyntaxNode {
        self.entries[id.0].node
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].next_sibling
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.entries[id.0].children
    }

    pub fn child(&self, id: NodeId, n: usize) -> Option<NodeId> {
        self.entries[id.0].children.get(n).copied()
    }

    /// All ids in preorder.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.entries.len()).map(NodeId)
    }
}
