// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definition for CST traversal.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stack::TraversalStack;
use crate::nodes::{for_each_node_kind, SyntaxNode};

/// The moment at which a traversal notifies a visitor about a node.
///
/// Every accepted node receives exactly one `Opening` and one `Closing`.
/// `Second` and `Subsequent` are only emitted by shapes that need an emission
/// point between children, such as separators or keyword fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPhase {
    Opening,
    Second,
    Subsequent,
    Closing,
}

impl VisitPhase {
    /// Returns true for `Closing`, the only phase the composite visitor reverses.
    pub fn is_closing(self) -> bool {
        self == VisitPhase::Closing
    }
}

impl fmt::Display for VisitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VisitPhase::Opening => "opening",
            VisitPhase::Second => "second",
            VisitPhase::Subsequent => "subsequent",
            VisitPhase::Closing => "closing",
        })
    }
}

/// Generates one `visit_*` method per node kind.
///
/// Each default implementation forwards to [`Visitor::visit_default`], which is
/// what lets a visitor override only the kinds it cares about.
macro_rules! visitor_methods {
    ($( $variant:ident = $tag:literal => $name:literal ),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a `", $name, "` node.")]
                fn [<visit_ $variant:snake>](
                    &mut self,
                    node: &'a SyntaxNode,
                    phase: VisitPhase,
                    stack: &TraversalStack<'a>,
                ) {
                    self.visit_default(Some(node), phase, stack);
                }
            )*
        }
    };
}

/// Read-only visitor over a syntax tree.
///
/// A traversal calls [`set_up`](Self::set_up) once, then a sequence of
/// `visit_*` calls as dictated by its shapes, then [`tear_down`](Self::tear_down)
/// once. Each visitor instance is meant for a single walk.
///
/// # Example
///
/// ```
/// use cstwalk_cst::{NodeKind, SyntaxNode, TraversalStack, VisitPhase, Visitor};
///
/// #[derive(Default)]
/// struct IdentCounter {
///     count: usize,
/// }
///
/// impl<'a> Visitor<'a> for IdentCounter {
///     fn visit_ident(&mut self, _node: &'a SyntaxNode, phase: VisitPhase, _: &TraversalStack<'a>) {
///         if phase == VisitPhase::Opening {
///             self.count += 1;
///         }
///     }
/// }
///
/// let tree = [SyntaxNode::new(NodeKind::Plus)
///     .child(SyntaxNode::leaf(NodeKind::Ident, "a"))
///     .child(SyntaxNode::leaf(NodeKind::Ident, "b"))];
/// let mut counter = IdentCounter::default();
/// cstwalk_cst::traverse_source_order(&tree, &mut counter).unwrap();
/// assert_eq!(counter.count, 2);
/// ```
pub trait Visitor<'a> {
    /// Called once before the first event.
    fn set_up(&mut self) {}

    /// Called once after the last event of a successful walk.
    fn tear_down(&mut self) {}

    /// Called when the engine accepts `node`, before any of its events.
    fn push(&mut self, node: &'a SyntaxNode) {
        let _ = node;
    }

    /// Called when the engine is done with the most recently pushed node.
    ///
    /// Visitors that keep their own stack return the popped node.
    fn pop(&mut self) -> Option<&'a SyntaxNode> {
        None
    }

    /// Fallback for every kind method that is not overridden.
    ///
    /// `node` is `None` when the dispatch models an absent optional slot.
    fn visit_default(
        &mut self,
        node: Option<&'a SyntaxNode>,
        phase: VisitPhase,
        stack: &TraversalStack<'a>,
    ) {
        let _ = (node, phase, stack);
    }

    for_each_node_kind!(visitor_methods);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeKind;

    #[derive(Default)]
    struct Fallbacks {
        seen: Vec<(Option<NodeKind>, VisitPhase)>,
    }

    impl<'a> Visitor<'a> for Fallbacks {
        fn visit_default(
            &mut self,
            node: Option<&'a SyntaxNode>,
            phase: VisitPhase,
            _stack: &TraversalStack<'a>,
        ) {
            self.seen.push((node.map(SyntaxNode::kind), phase));
        }
    }

    #[test]
    fn unoverridden_methods_fall_back_to_default() {
        let node = SyntaxNode::leaf(NodeKind::NumInt, "1");
        let stack = TraversalStack::new();
        let mut visitor = Fallbacks::default();
        visitor.visit_num_int(&node, VisitPhase::Opening, &stack);
        visitor.visit_literal_instanceof(&node, VisitPhase::Closing, &stack);
        assert_eq!(
            visitor.seen,
            vec![
                (Some(NodeKind::NumInt), VisitPhase::Opening),
                (Some(NodeKind::NumInt), VisitPhase::Closing),
            ]
        );
    }

    #[test]
    fn lifecycle_defaults_are_inert() {
        let node = SyntaxNode::new(NodeKind::Slist);
        let mut visitor = Fallbacks::default();
        visitor.set_up();
        visitor.push(&node);
        assert!(visitor.pop().is_none());
        visitor.tear_down();
        assert!(visitor.seen.is_empty());
    }

    #[test]
    fn phase_display() {
        assert_eq!(VisitPhase::Subsequent.to_string(), "subsequent");
        assert!(VisitPhase::Closing.is_closing());
        assert!(!VisitPhase::Second.is_closing());
    }
}
