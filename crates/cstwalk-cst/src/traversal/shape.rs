// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Reusable traversal templates.
//!
//! A [`Shape`] fixes, for one node, the order in which its children are
//! accepted relative to the node's own phase events. Every shape is written
//! against four primitives, supplied by the walker through [`Primitives`]:
//!
//! - accept a node (recursively, only if it is still unvisited)
//! - emit a phase event for a node
//! - accept the following siblings of a node
//! - skip a node (mark it visited without any event)

use serde::Serialize;

use super::tree::{NodeId, TreeIndex};
use crate::error::{MismatchReason, TraversalError};
use crate::visitor::VisitPhase;

/// The four operations shapes are built from.
pub(crate) trait Primitives {
    fn accept(&mut self, id: Option<NodeId>) -> Result<(), TraversalError>;
    fn emit(&mut self, id: NodeId, phase: VisitPhase);
    fn accept_siblings(&mut self, id: Option<NodeId>) -> Result<(), TraversalError>;
    fn skip(&mut self, id: NodeId);
}

/// Traversal template assigned to a node.
///
/// In the descriptions `c0`, `c1`, ... are children in order and `open`,
/// `second`, `sub`, `close` are the node's own phase events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    /// open, c0, close. Leaves and single-operand nodes.
    Enclose,
    /// open, every child, close.
    EncloseAll,
    /// open, children with sub between them, close.
    Delimited,
    /// open, c0, second, c1, sub, c2, ..., close.
    HeadDelimited,
    /// c0, open, c0's following siblings, close. Binary operators; unlike
    /// `Wrap`, both operands must be present.
    Infix,
    /// c0, open, close.
    Postfix,
    /// c0, open, c0's following siblings, close.
    Wrap,
    /// c0, open, middle children, close, last child. Calls with a trailing closure.
    WrapWithTrailing,
    /// c0, open, c1, second, c2, close.
    Ternary,
    /// c0, open, c1, close.
    Subscript,
    /// c0, open, skip c1, c1's children, close.
    TypeTest,
    /// open, c0, second, c1, sub, c2, close.
    VarArgs,
    /// open, skip c0, c0's first child, close, c0's following siblings.
    Guarded,
    /// open, skip c0, c0's first child, close, c1, then sub before each later child.
    Branches,
    /// open, c0, second, c0's following siblings, close.
    HeadThenRest,
    /// open, c0, close, c0's following siblings.
    HeadThenOutside,
    /// open, c0, second, c1, sub, c2, close, c3.
    ClassicFor,
    /// every child but the last, open, skip the last, its children with sub
    /// between them, close.
    CaseGroup,
}

impl Shape {
    /// Fewest children a node needs for this shape to read it.
    pub fn min_children(self) -> usize {
        match self {
            Shape::Enclose | Shape::EncloseAll | Shape::Delimited => 0,
            Shape::HeadDelimited
            | Shape::Postfix
            | Shape::Guarded
            | Shape::Wrap
            | Shape::HeadThenRest
            | Shape::HeadThenOutside => 1,
            Shape::Infix
            | Shape::WrapWithTrailing
            | Shape::Subscript
            | Shape::TypeTest
            | Shape::Branches
            | Shape::CaseGroup => 2,
            Shape::Ternary | Shape::VarArgs => 3,
            Shape::ClassicFor => 4,
        }
    }

    /// Whether the shape reads through its first child to a grandchild.
    fn reads_grandchild(self) -> bool {
        matches!(self, Shape::Guarded | Shape::Branches)
    }

    /// Verifies `id` has what this shape reads.
    pub(crate) fn check(self, tree: &TreeIndex<'_>, id: NodeId) -> Result<(), TraversalError> {
        let node = tree.node(id);
        let found = tree.children(id).len();
        let expected = self.min_children();
        let reason = if found < expected {
            Some(MismatchReason::TooFewChildren {
                shape: self,
                expected,
                found,
            })
        } else if self.reads_grandchild() {
            tree.child(id, 0)
                .filter(|&c0| tree.children(c0).is_empty())
                .map(|c0| MismatchReason::MissingGrandchild {
                    shape: self,
                    child: tree.node(c0).kind(),
                })
        } else {
            None
        };
        match reason {
            Some(reason) => Err(TraversalError::mismatch(node.kind(), node.span().start, reason)),
            None => Ok(()),
        }
    }

    /// Runs the template for `id`. Call [`check`](Self::check) first.
    pub(crate) fn run<P: Primitives + ?Sized>(
        self,
        tree: &TreeIndex<'_>,
        host: &mut P,
        id: NodeId,
    ) -> Result<(), TraversalError> {
        use VisitPhase::{Closing, Opening, Second, Subsequent};

        let kids = tree.children(id);
        let c = |n: usize| kids.get(n).copied();

        match self {
            Shape::Enclose => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Closing);
            }
            Shape::EncloseAll => {
                host.emit(id, Opening);
                for &kid in kids {
                    host.accept(Some(kid))?;
                }
                host.emit(id, Closing);
            }
            Shape::Delimited => {
                host.emit(id, Opening);
                separated(host, id, kids)?;
                host.emit(id, Closing);
            }
            Shape::HeadDelimited => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Second);
                separated(host, id, &kids[1..])?;
                host.emit(id, Closing);
            }
            Shape::Postfix => {
                host.accept(c(0))?;
                host.emit(id, Opening);
                host.emit(id, Closing);
            }
            Shape::Infix | Shape::Wrap => {
                host.accept(c(0))?;
                host.emit(id, Opening);
                host.accept_siblings(c(0))?;
                host.emit(id, Closing);
            }
            Shape::WrapWithTrailing => {
                let last = kids.len() - 1;
                host.accept(c(0))?;
                host.emit(id, Opening);
                for &kid in &kids[1..last] {
                    host.accept(Some(kid))?;
                }
                host.emit(id, Closing);
                host.accept(c(last))?;
            }
            Shape::Ternary => {
                host.accept(c(0))?;
                host.emit(id, Opening);
                host.accept(c(1))?;
                host.emit(id, Second);
                host.accept(c(2))?;
                host.emit(id, Closing);
            }
            Shape::Subscript => {
                host.accept(c(0))?;
                host.emit(id, Opening);
                host.accept(c(1))?;
                host.emit(id, Closing);
            }
            Shape::TypeTest => {
                host.accept(c(0))?;
                host.emit(id, Opening);
                if let Some(wrapper) = c(1) {
                    host.skip(wrapper);
                    for &kid in tree.children(wrapper) {
                        host.accept(Some(kid))?;
                    }
                }
                host.emit(id, Closing);
            }
            Shape::VarArgs => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Second);
                host.accept(c(1))?;
                host.emit(id, Subsequent);
                host.accept(c(2))?;
                host.emit(id, Closing);
            }
            Shape::Guarded => {
                host.emit(id, Opening);
                guard(tree, host, c(0))?;
                host.emit(id, Closing);
                host.accept_siblings(c(0))?;
            }
            Shape::Branches => {
                host.emit(id, Opening);
                guard(tree, host, c(0))?;
                host.emit(id, Closing);
                host.accept(c(1))?;
                for &kid in kids.iter().skip(2) {
                    host.emit(id, Subsequent);
                    host.accept(Some(kid))?;
                }
            }
            Shape::HeadThenRest => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Second);
                host.accept_siblings(c(0))?;
                host.emit(id, Closing);
            }
            Shape::HeadThenOutside => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Closing);
                host.accept_siblings(c(0))?;
            }
            Shape::ClassicFor => {
                host.emit(id, Opening);
                host.accept(c(0))?;
                host.emit(id, Second);
                host.accept(c(1))?;
                host.emit(id, Subsequent);
                host.accept(c(2))?;
                host.emit(id, Closing);
                host.accept(c(3))?;
            }
            Shape::CaseGroup => {
                let last = kids.len() - 1;
                for &label in &kids[..last] {
                    host.accept(Some(label))?;
                }
                host.emit(id, Opening);
                host.skip(kids[last]);
                separated(host, id, tree.children(kids[last]))?;
                host.emit(id, Closing);
            }
        }
        Ok(())
    }
}

/// Accepts `kids` with a `Subsequent` event for `id` between each pair.
fn separated<P: Primitives + ?Sized>(
    host: &mut P,
    id: NodeId,
    kids: &[NodeId],
) -> Result<(), TraversalError> {
    for (i, &kid) in kids.iter().enumerate() {
        if i > 0 {
            host.emit(id, VisitPhase::Subsequent);
        }
        host.accept(Some(kid))?;
    }
    Ok(())
}

/// Skips a wrapper and accepts its first child in its place.
fn guard<P: Primitives + ?Sized>(
    tree: &TreeIndex<'_>,
    host: &mut P,
    wrapper: Option<NodeId>,
) -> Result<(), TraversalError> {
    if let Some(wrapper) = wrapper {
        host.skip(wrapper);
        host.accept(tree.child(wrapper, 0))?;
    }
    Ok(())
}
