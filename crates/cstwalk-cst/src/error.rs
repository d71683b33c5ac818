// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for tree traversal.

use std::fmt;

use thiserror::Error;

use crate::nodes::{NodeKind, Position};
use crate::traversal::Shape;

/// Why a tree does not fit the traversal's expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchReason {
    /// The node has fewer children than its shape reads.
    TooFewChildren {
        shape: Shape,
        expected: usize,
        found: usize,
    },
    /// The shape skips a wrapper child and reads its first child, which is absent.
    MissingGrandchild { shape: Shape, child: NodeKind },
    /// Nodes were never reached by any shape.
    Unconsumed { remaining: usize },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::TooFewChildren {
                shape,
                expected,
                found,
            } => write!(
                f,
                "{shape:?} shape needs at least {expected} children, found {found}"
            ),
            MismatchReason::MissingGrandchild { shape, child } => {
                write!(f, "{shape:?} shape expects {child} to have a child")
            }
            MismatchReason::Unconsumed { remaining } => {
                write!(f, "{remaining} node(s) were never visited")
            }
        }
    }
}

/// Errors that abort a traversal.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// The tree's structure does not match the grammar the shapes assume.
    #[error("structural mismatch at {kind} ({position}): {reason}")]
    StructuralMismatch {
        kind: NodeKind,
        position: Position,
        reason: MismatchReason,
    },

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth limit {limit} exceeded at {kind} ({position})")]
    DepthLimitExceeded {
        limit: usize,
        kind: NodeKind,
        position: Position,
    },
}

impl TraversalError {
    pub fn mismatch(kind: NodeKind, position: Position, reason: MismatchReason) -> Self {
        TraversalError::StructuralMismatch {
            kind,
            position,
            reason,
        }
    }

    /// Kind of the node where the failure was detected.
    pub fn kind(&self) -> NodeKind {
        match self {
            TraversalError::StructuralMismatch { kind, .. }
            | TraversalError::DepthLimitExceeded { kind, .. } => *kind,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            TraversalError::StructuralMismatch { position, .. }
            | TraversalError::DepthLimitExceeded { position, .. } => *position,
        }
    }
}
