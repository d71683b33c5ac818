// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The source-order walk.
//!
//! Children in the tree are not always stored in the order their text appears
//! (`a + b` stores `PLUS[a, b]` but reads `a`, then `+`, then `b`). This walk
//! delivers events in reading order by running each node's shape and by
//! tracking which nodes are still unvisited, so that a node reached twice is
//! only visited once.

use tracing::{debug, debug_span, trace};

use super::shape::Primitives;
use super::table::shape_for;
use super::tree::{NodeId, TreeIndex};
use super::unvisited::UnvisitedSet;
use super::{TraversalOptions, TraversalReport};
use crate::error::{MismatchReason, TraversalError};
use crate::nodes::SyntaxNode;
use crate::visitor::{dispatch, Dispatch, TraversalStack, VisitPhase, Visitor};

struct SourceOrderWalker<'t, 'a, 'v, V: Visitor<'a> + ?Sized> {
    tree: &'t TreeIndex<'a>,
    unvisited: UnvisitedSet,
    stack: TraversalStack<'a>,
    visitor: &'v mut V,
    options: &'t TraversalOptions,
    report: TraversalReport,
}

impl<'a, V: Visitor<'a> + ?Sized> SourceOrderWalker<'_, 'a, '_, V> {
    fn enter(&mut self, id: NodeId) -> Result<(), TraversalError> {
        let node = self.tree.node(id);
        if let Some(limit) = self.options.max_depth {
            if self.stack.depth() >= limit {
                return Err(TraversalError::DepthLimitExceeded {
                    limit,
                    kind: node.kind(),
                    position: node.span().start,
                });
            }
        }

        let shape = shape_for(self.tree, id);
        shape.check(self.tree, id)?;

        self.report.nodes += 1;
        self.stack.push(node);
        self.visitor.push(node);

        let tree = self.tree;
        shape.run(tree, self, id)?;

        self.visitor.pop();
        self.stack.pop();
        Ok(())
    }

    fn first_unvisited_error(&self) -> Option<TraversalError> {
        let first = self.unvisited.iter().next()?;
        let node: &SyntaxNode = self.tree.node(first);
        Some(TraversalError::mismatch(
            node.kind(),
            node.span().start,
            MismatchReason::Unconsumed {
                remaining: self.unvisited.len(),
            },
        ))
    }
}

impl<'a, V: Visitor<'a> + ?Sized> Primitives for SourceOrderWalker<'_, 'a, '_, V> {
    fn accept(&mut self, id: Option<NodeId>) -> Result<(), TraversalError> {
        match id {
            Some(id) if self.unvisited.contains(id) => self.enter(id),
            _ => Ok(()),
        }
    }

    fn emit(&mut self, id: NodeId, phase: VisitPhase) {
        if phase == VisitPhase::Opening {
            self.unvisited.remove(id);
        }
        let node = self.tree.node(id);
        trace!(kind = %node.kind(), %phase, depth = self.stack.depth(), "event");
        self.report.events += 1;
        if dispatch(self.visitor, Some(node), phase, &self.stack) == Dispatch::Fallback {
            self.report.fallback_dispatches += 1;
        }
    }

    fn accept_siblings(&mut self, id: Option<NodeId>) -> Result<(), TraversalError> {
        let mut next = id.and_then(|id| self.tree.next_sibling(id));
        while let Some(sibling) = next {
            self.accept(Some(sibling))?;
            next = self.tree.next_sibling(sibling);
        }
        Ok(())
    }

    fn skip(&mut self, id: NodeId) {
        if self.unvisited.remove(id) {
            self.report.skipped += 1;
        }
    }
}

/// Walks `roots` in source order.
///
/// `set_up` is called before the first event. `tear_down` is only called when
/// the walk succeeds.
pub(crate) fn walk<'a, V: Visitor<'a> + ?Sized>(
    roots: &'a [SyntaxNode],
    visitor: &mut V,
    options: &TraversalOptions,
) -> Result<TraversalReport, TraversalError> {
    let span = debug_span!("source_order", roots = roots.len());
    let _guard = span.enter();

    let tree = TreeIndex::build(roots);
    let mut walker = SourceOrderWalker {
        tree: &tree,
        unvisited: UnvisitedSet::new(&tree),
        stack: TraversalStack::new(),
        visitor,
        options,
        report: TraversalReport::default(),
    };

    walker.visitor.set_up();
    let first = tree.roots().first().copied();
    walker.accept(first)?;
    walker.accept_siblings(first)?;

    if !walker.unvisited.is_empty() {
        debug!(remaining = walker.unvisited.len(), "nodes left unvisited");
        if options.require_complete {
            if let Some(err) = walker.first_unvisited_error() {
                return Err(err);
            }
        }
    }
    walker.report.unvisited = walker.unvisited.len();

    walker.visitor.tear_down();
    debug!(
        nodes = walker.report.nodes,
        skipped = walker.report.skipped,
        events = walker.report.events,
        fallbacks = walker.report.fallback_dispatches,
        "source-order walk finished"
    );
    Ok(walker.report)
}
