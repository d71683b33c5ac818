// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The set of nodes a source-order walk has not yet opened.

use super::tree::{NodeId, TreeIndex};

/// Every node of a forest that has not been opened or skipped yet.
///
/// Membership only ever shrinks. Iteration is in lexical order: by start line,
/// then start column, then preorder encounter index for nodes that start at
/// the same position.
#[derive(Debug)]
pub struct UnvisitedSet {
    lexical: Vec<NodeId>,
    pending: Vec<bool>,
    remaining: usize,
}

impl UnvisitedSet {
    pub fn new(tree: &TreeIndex<'_>) -> Self {
        let mut lexical: Vec<NodeId> = tree.ids().collect();
        lexical.sort_by_key(|&id| (tree.node(id).span().start, id));
        Self {
            pending: vec![true; lexical.len()],
            remaining: lexical.len(),
            lexical,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.pending.get(id.0).copied().unwrap_or(false)
    }

    /// Removes `id`, returning whether it was still present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.pending.get_mut(id.0) {
            Some(slot) if *slot => {
                *slot = false;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining nodes in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.lexical.iter().copied().filter(|&id| self.pending[id.0])
    }
}
