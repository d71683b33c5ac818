// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Plain structural walks: pre-order and flat lexical.

use tracing::{debug, debug_span};

use super::tree::{NodeId, TreeIndex};
use super::{TraversalOptions, TraversalReport};
use crate::error::TraversalError;
use crate::nodes::SyntaxNode;
use crate::visitor::{dispatch, Dispatch, NodeCollector, TraversalStack, VisitPhase, Visitor};

struct EventSink<'s, 'a, V: Visitor<'a> + ?Sized> {
    visitor: &'s mut V,
    stack: TraversalStack<'a>,
    report: TraversalReport,
}

impl<'a, V: Visitor<'a> + ?Sized> EventSink<'_, 'a, V> {
    fn emit(&mut self, node: &'a SyntaxNode, phase: VisitPhase) {
        self.report.events += 1;
        if dispatch(self.visitor, Some(node), phase, &self.stack) == Dispatch::Fallback {
            self.report.fallback_dispatches += 1;
        }
    }

    fn preorder(
        &mut self,
        tree: &TreeIndex<'a>,
        id: NodeId,
        options: &TraversalOptions,
    ) -> Result<(), TraversalError> {
        let node = tree.node(id);
        if let Some(limit) = options.max_depth {
            if self.stack.depth() >= limit {
                return Err(TraversalError::DepthLimitExceeded {
                    limit,
                    kind: node.kind(),
                    position: node.span().start,
                });
            }
        }
        self.report.nodes += 1;
        self.stack.push(node);
        self.visitor.push(node);
        self.emit(node, VisitPhase::Opening);
        for &child in tree.children(id) {
            self.preorder(tree, child, options)?;
        }
        self.emit(node, VisitPhase::Closing);
        self.visitor.pop();
        self.stack.pop();
        Ok(())
    }
}

/// Opens each node, walks all of its children, then closes it.
pub(crate) fn walk_preorder<'a, V: Visitor<'a> + ?Sized>(
    roots: &'a [SyntaxNode],
    visitor: &mut V,
    options: &TraversalOptions,
) -> Result<TraversalReport, TraversalError> {
    let span = debug_span!("preorder", roots = roots.len());
    let _guard = span.enter();

    let tree = TreeIndex::build(roots);
    let mut sink = EventSink {
        visitor,
        stack: TraversalStack::new(),
        report: TraversalReport::default(),
    };
    sink.visitor.set_up();
    for &root in tree.roots() {
        sink.preorder(&tree, root, options)?;
    }
    sink.visitor.tear_down();
    debug!(nodes = sink.report.nodes, events = sink.report.events, "preorder walk finished");
    Ok(sink.report)
}

/// Visits every node once, `Opening` then `Closing`, in lexical order with no
/// nesting between nodes.
///
/// Nodes are gathered by a pre-order walk and stably sorted by start
/// position, so nodes that start together keep their pre-order order.
pub(crate) fn walk_flat<'a, V: Visitor<'a> + ?Sized>(
    roots: &'a [SyntaxNode],
    visitor: &mut V,
    options: &TraversalOptions,
) -> Result<TraversalReport, TraversalError> {
    let span = debug_span!("flat", roots = roots.len());
    let _guard = span.enter();

    let mut collector = NodeCollector::new();
    walk_preorder(roots, &mut collector, options)?;
    let mut nodes = collector.into_nodes();
    nodes.sort_by_key(|n| n.span().start);

    let mut sink = EventSink {
        visitor,
        stack: TraversalStack::new(),
        report: TraversalReport::default(),
    };
    sink.visitor.set_up();
    for node in nodes {
        sink.report.nodes += 1;
        sink.stack.push(node);
        sink.visitor.push(node);
        sink.emit(node, VisitPhase::Opening);
        sink.emit(node, VisitPhase::Closing);
        sink.visitor.pop();
        sink.stack.pop();
    }
    sink.visitor.tear_down();
    debug!(nodes = sink.report.nodes, "flat walk finished");
    Ok(sink.report)
}
