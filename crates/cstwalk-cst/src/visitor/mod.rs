// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure.
//!
//! - [`Visitor`]: one method per node kind, all defaulting to `visit_default`
//! - [`CompositeVisitor`]: fans a single walk out to several visitors
//! - [`dispatch`]: routes a `(node, phase)` event to the right method
//! - [`EventRecorder`] and [`NodeCollector`]: passive observers
//! - [`SourcePrinter`]: renders Groovy-like source text

mod composite;
mod dispatch;
mod recorder;
mod source_printer;
mod tokens;
mod stack;
mod traits;

pub use composite::CompositeVisitor;
pub use dispatch::{dispatch, Dispatch};
pub use recorder::{Event, EventRecorder, NodeCollector};
pub use source_printer::{PrinterConfig, SourcePrinter};
pub use stack::TraversalStack;
pub use traits::{VisitPhase, Visitor};
