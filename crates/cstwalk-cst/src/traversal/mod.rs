// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal engines.
//!
//! Three walks drive a [`Visitor`] over a forest of [`SyntaxNode`]s:
//!
//! | Walk | Event order |
//! |------|-------------|
//! | [`Traversal::SourceOrder`] | reading order of the source text, per node [`Shape`] |
//! | [`Traversal::PreOrder`] | open, children, close |
//! | [`Traversal::Flat`] | every node opened and closed once, sorted by position |
//!
//! All of them rebuild their bookkeeping on every call, so one engine value can
//! be reused for any number of walks.

mod shape;
mod source_order;
mod structural;
mod table;
mod tree;
mod unvisited;

pub use shape::Shape;
pub use table::{base_shape, shape_for};
pub use tree::{NodeId, TreeIndex};
pub use unvisited::UnvisitedSet;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TraversalError;
use crate::nodes::SyntaxNode;
use crate::visitor::Visitor;

/// Default nesting limit for recursive walks.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

// ============================================================================
// Options
// ============================================================================

/// Options controlling a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Deepest accepted nesting before the walk fails. `None` disables the check.
    pub max_depth: Option<usize>,
    /// Fail a source-order walk that leaves nodes unvisited.
    pub require_complete: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            require_complete: true,
        }
    }
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_require_complete(mut self, require_complete: bool) -> Self {
        self.require_complete = require_complete;
        self
    }
}

/// Counters from a finished walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// Nodes accepted.
    pub nodes: usize,
    /// Phase events delivered.
    pub events: usize,
    /// Events that reached `visit_default` because the kind had no method.
    pub fallback_dispatches: usize,
    /// Wrapper nodes a source-order walk consumed without events.
    pub skipped: usize,
    /// Nodes a source-order walk never reached. Always zero for the other walks.
    pub unvisited: usize,
}

// ============================================================================
// Traversal selection
// ============================================================================

/// Which walk to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    #[default]
    SourceOrder,
    PreOrder,
    Flat,
}

impl Traversal {
    pub const ALL: [Traversal; 3] = [Traversal::SourceOrder, Traversal::PreOrder, Traversal::Flat];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::SourceOrder => "source",
            Traversal::PreOrder => "preorder",
            Traversal::Flat => "flat",
        }
    }

    /// Drives `visitor` over `roots`. Top-level nodes are treated as siblings.
    pub fn run<'a, V: Visitor<'a> + ?Sized>(
        self,
        roots: &'a [SyntaxNode],
        visitor: &mut V,
        options: &TraversalOptions,
    ) -> Result<TraversalReport, TraversalError> {
        match self {
            Traversal::SourceOrder => source_order::walk(roots, visitor, options),
            Traversal::PreOrder => structural::walk_preorder(roots, visitor, options),
            Traversal::Flat => structural::walk_flat(roots, visitor, options),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown traversal name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal '{0}' (expected source, preorder or flat)")]
pub struct UnknownTraversal(pub String);

impl FromStr for Traversal {
    type Err = UnknownTraversal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Traversal::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTraversal(s.to_string()))
    }
}

/// Walks `roots` in source order with default options.
pub fn traverse_source_order<'a, V: Visitor<'a> + ?Sized>(
    roots: &'a [SyntaxNode],
    visitor: &mut V,
) -> Result<TraversalReport, TraversalError> {
    source_order::walk(roots, visitor, &TraversalOptions::default())
}

/// Walks `roots` in source order.
pub fn traverse_source_order_with<'a, V: Visitor<'a> + ?Sized>(
    roots: &'a [SyntaxNode],
    visitor: &mut V,
    options: &TraversalOptions,
) -> Result<TraversalReport, TraversalError> {
    source_order::walk(roots, visitor, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_builders() {
        let options = TraversalOptions::new()
            .with_max_depth(None)
            .with_require_complete(false);
        assert_eq!(options.max_depth, None);
        assert!(!options.require_complete);
        assert_eq!(TraversalOptions::default().max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn traversal_names_round_trip() {
        for t in Traversal::ALL {
            assert_eq!(t.name().parse::<Traversal>(), Ok(t));
        }
        assert!("sideways".parse::<Traversal>().is_err());
    }
}
