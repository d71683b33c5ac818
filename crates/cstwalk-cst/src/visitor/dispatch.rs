// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Kind-to-method dispatch.
//!
//! [`dispatch`] is the single point through which every traversal reaches a
//! visitor. The match is generated from the kind table, so it is exhaustive:
//! a kind added to the table without a visitor method does not compile.

use tracing::debug;

use super::stack::TraversalStack;
use super::traits::{VisitPhase, Visitor};
use crate::nodes::{for_each_node_kind, NodeKind, SyntaxNode};

/// How a dispatched event reached the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The kind's own `visit_*` method was called.
    Method,
    /// The event went to `visit_default`, either because the node slot was
    /// absent or because the kind has no table entry.
    Fallback,
}

macro_rules! dispatch_kind_fn {
    ($( $variant:ident = $tag:literal => $name:literal ),* $(,)?) => {
        paste::paste! {
            fn dispatch_kind<'a, V: Visitor<'a> + ?Sized>(
                visitor: &mut V,
                node: &'a SyntaxNode,
                phase: VisitPhase,
                stack: &TraversalStack<'a>,
            ) -> Dispatch {
                match node.kind() {
                    $(NodeKind::$variant => visitor.[<visit_ $variant:snake>](node, phase, stack),)*
                    NodeKind::Unknown(tag) => {
                        debug!(tag, %phase, "no visitor method for node kind, using default");
                        visitor.visit_default(Some(node), phase, stack);
                        return Dispatch::Fallback;
                    }
                }
                Dispatch::Method
            }
        }
    };
}

for_each_node_kind!(dispatch_kind_fn);

/// Deliver one `(node, phase)` event to `visitor`.
///
/// A `None` node models an absent optional grammar slot and goes to
/// `visit_default(None, ..)`.
pub fn dispatch<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    node: Option<&'a SyntaxNode>,
    phase: VisitPhase,
    stack: &TraversalStack<'a>,
) -> Dispatch {
    match node {
        Some(node) => dispatch_kind(visitor, node, phase, stack),
        None => {
            visitor.visit_default(None, phase, stack);
            Dispatch::Fallback
        }
    }
}
