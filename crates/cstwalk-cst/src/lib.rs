// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor-driven traversal of Groovy concrete syntax trees.
//!
//! The crate walks an immutable tree produced by an external parser and
//! delivers `(node, phase)` events to a [`Visitor`]. The main walk,
//! [`traverse_source_order`], delivers events in the order the corresponding
//! text appears in the source, which is what a pretty printer needs.
//!
//! ```
//! use cstwalk_cst::{print_source, NodeKind, PrinterConfig, SyntaxNode};
//!
//! let tree = [SyntaxNode::new(NodeKind::Plus)
//!     .child(SyntaxNode::leaf(NodeKind::NumInt, "1"))
//!     .child(SyntaxNode::leaf(NodeKind::NumInt, "2"))];
//! assert_eq!(print_source(&tree, &PrinterConfig::default()).unwrap(), "1 + 2");
//! ```

pub mod error;
pub mod nodes;
pub mod traversal;
pub mod visitor;

pub use error::{MismatchReason, TraversalError};
pub use nodes::{NodeKind, Position, Span, SyntaxNode};
pub use traversal::{
    traverse_source_order, traverse_source_order_with, Shape, Traversal, TraversalOptions,
    TraversalReport,
};
pub use visitor::{
    dispatch, CompositeVisitor, Dispatch, Event, EventRecorder, NodeCollector, PrinterConfig,
    SourcePrinter, TraversalStack, VisitPhase, Visitor,
};

/// Renders `roots` as source text using a source-order walk.
pub fn print_source(roots: &[SyntaxNode], config: &PrinterConfig) -> Result<String, TraversalError> {
    let mut printer = SourcePrinter::new(config.clone());
    traverse_source_order(roots, &mut printer)?;
    Ok(printer.into_output())
}
