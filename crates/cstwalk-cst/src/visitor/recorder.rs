// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitors that observe a walk without interpreting it.
//!
//! [`EventRecorder`] keeps the full `(node, phase)` trace, which is what the
//! ordering tests and the `events` command work from. [`NodeCollector`] keeps
//! each node once, in the order its `Opening` arrived.

use serde::Serialize;

use super::stack::TraversalStack;
use super::traits::{VisitPhase, Visitor};
use crate::nodes::{NodeKind, Position, SyntaxNode};

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// `None` for an event on an absent node slot.
    pub kind: Option<NodeKind>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    pub phase: VisitPhase,
    /// Depth of the engine's ancestor stack when the event fired.
    pub depth: usize,
    pub start: Position,
}

/// Records every event it receives.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
    set_up_calls: usize,
    tear_down_calls: usize,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Number of `set_up` and `tear_down` calls seen.
    pub fn lifecycle_calls(&self) -> (usize, usize) {
        (self.set_up_calls, self.tear_down_calls)
    }

    /// Events rendered as `KIND:phase`, convenient in assertions.
    pub fn trace(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| match e.kind {
                Some(kind) if e.text.is_empty() => format!("{kind}:{}", e.phase),
                Some(kind) => format!("{kind}({}):{}", e.text, e.phase),
                None => format!("<none>:{}", e.phase),
            })
            .collect()
    }

    /// Checks that `Opening` and `Closing` events form a properly nested
    /// bracket sequence with matching kinds.
    pub fn is_well_nested(&self) -> bool {
        let mut open: Vec<(Option<NodeKind>, Position)> = Vec::new();
        for event in &self.events {
            match event.phase {
                VisitPhase::Opening => open.push((event.kind, event.start)),
                VisitPhase::Closing => {
                    if open.pop() != Some((event.kind, event.start)) {
                        return false;
                    }
                }
                VisitPhase::Second | VisitPhase::Subsequent => {}
            }
        }
        open.is_empty()
    }
}

impl<'a> Visitor<'a> for EventRecorder {
    fn set_up(&mut self) {
        self.set_up_calls += 1;
    }

    fn tear_down(&mut self) {
        self.tear_down_calls += 1;
    }

    fn visit_default(
        &mut self,
        node: Option<&'a SyntaxNode>,
        phase: VisitPhase,
        stack: &TraversalStack<'a>,
    ) {
        self.events.push(Event {
            kind: node.map(SyntaxNode::kind),
            text: node.map(|n| n.text().to_string()).unwrap_or_default(),
            phase,
            depth: stack.depth(),
            start: node.map(|n| n.span().start).unwrap_or_default(),
        });
    }
}

/// Collects each node the first time its `Opening` event arrives.
#[derive(Debug, Default)]
pub struct NodeCollector<'a> {
    nodes: Vec<&'a SyntaxNode>,
}

impl<'a> NodeCollector<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[&'a SyntaxNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<&'a SyntaxNode> {
        self.nodes
    }
}

impl<'a> Visitor<'a> for NodeCollector<'a> {
    fn visit_default(
        &mut self,
        node: Option<&'a SyntaxNode>,
        phase: VisitPhase,
        _stack: &TraversalStack<'a>,
    ) {
        if let (Some(node), VisitPhase::Opening) = (node, phase) {
            self.nodes.push(node);
        }
    }
}
