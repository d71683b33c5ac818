// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A visitor that fans one walk out to several visitors.
//!
//! Independent concerns, such as emitting text and recording diagnostics, can
//! observe the same traversal without walking the tree twice. `Opening`,
//! `Second` and `Subsequent` events go to the inner visitors front to back;
//! `Closing` events go back to front, so a later visitor's closing behavior is
//! always nested inside an earlier one's.

use super::stack::TraversalStack;
use super::traits::{VisitPhase, Visitor};
use crate::nodes::{for_each_node_kind, SyntaxNode};

/// Fans every event out to an ordered list of borrowed visitors.
///
/// The composite borrows its visitors for one walk; results are read from the
/// inner visitors after the composite is dropped.
pub struct CompositeVisitor<'v, 'a> {
    visitors: Vec<&'v mut dyn Visitor<'a>>,
}

impl<'v, 'a> CompositeVisitor<'v, 'a> {
    pub fn new(visitors: Vec<&'v mut dyn Visitor<'a>>) -> Self {
        Self { visitors }
    }

    /// Appends a visitor after the existing ones.
    #[must_use]
    pub fn with(mut self, visitor: &'v mut dyn Visitor<'a>) -> Self {
        self.visitors.push(visitor);
        self
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn fan_out<F>(&mut self, phase: VisitPhase, mut f: F)
    where
        F: FnMut(&mut (dyn Visitor<'a> + 'v)),
    {
        if phase.is_closing() {
            for visitor in self.visitors.iter_mut().rev() {
                f(&mut **visitor);
            }
        } else {
            for visitor in self.visitors.iter_mut() {
                f(&mut **visitor);
            }
        }
    }
}

macro_rules! composite_methods {
    ($( $variant:ident = $tag:literal => $name:literal ),* $(,)?) => {
        paste::paste! {
            $(
                fn [<visit_ $variant:snake>](
                    &mut self,
                    node: &'a SyntaxNode,
                    phase: VisitPhase,
                    stack: &TraversalStack<'a>,
                ) {
                    self.fan_out(phase, |v| v.[<visit_ $variant:snake>](node, phase, stack));
                }
            )*
        }
    };
}

impl<'v, 'a> Visitor<'a> for CompositeVisitor<'v, 'a> {
    fn set_up(&mut self) {
        for visitor in self.visitors.iter_mut() {
            visitor.set_up();
        }
    }

    fn tear_down(&mut self) {
        for visitor in self.visitors.iter_mut().rev() {
            visitor.tear_down();
        }
    }

    fn push(&mut self, node: &'a SyntaxNode) {
        for visitor in self.visitors.iter_mut() {
            visitor.push(node);
        }
    }

    /// Pops every inner visitor, back to front, and returns the result of the
    /// last one called (the first visitor). This only means something when the
    /// inner visitors keep equivalent stacks.
    fn pop(&mut self) -> Option<&'a SyntaxNode> {
        let mut popped = None;
        for visitor in self.visitors.iter_mut().rev() {
            popped = visitor.pop();
        }
        popped
    }

    fn visit_default(
        &mut self,
        node: Option<&'a SyntaxNode>,
        phase: VisitPhase,
        stack: &TraversalStack<'a>,
    ) {
        self.fan_out(phase, |v| v.visit_default(node, phase, stack));
    }

    for_each_node_kind!(composite_methods);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::nodes::NodeKind;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Named<'a> {
        name: &'static str,
        log: Log,
        stack: Vec<&'a SyntaxNode>,
    }

    impl<'a> Named<'a> {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                stack: Vec::new(),
            }
        }
    }

    impl<'a> Visitor<'a> for Named<'a> {
        fn set_up(&mut self) {
            self.log.borrow_mut().push(format!("{}.set_up", self.name));
        }

        fn tear_down(&mut self) {
            self.log.borrow_mut().push(format!("{}.tear_down", self.name));
        }

        fn push(&mut self, node: &'a SyntaxNode) {
            self.stack.push(node);
            self.log.borrow_mut().push(format!("{}.push", self.name));
        }

        fn pop(&mut self) -> Option<&'a SyntaxNode> {
            self.log.borrow_mut().push(format!("{}.pop", self.name));
            self.stack.pop()
        }

        fn visit_default(
            &mut self,
            _node: Option<&'a SyntaxNode>,
            phase: VisitPhase,
            _stack: &TraversalStack<'a>,
        ) {
            self.log.borrow_mut().push(format!("{}.{}", self.name, phase));
        }
    }

    #[test]
    fn closing_runs_in_reverse() {
        let log: Log = Rc::default();
        let mut a = Named::new("A", &log);
        let mut b = Named::new("B", &log);
        let node = SyntaxNode::new(NodeKind::Elist);
        let stack = TraversalStack::new();
        {
            let mut composite = CompositeVisitor::new(vec![&mut a as &mut dyn Visitor<'_>, &mut b]);
            composite.visit_elist(&node, VisitPhase::Opening, &stack);
            composite.visit_elist(&node, VisitPhase::Second, &stack);
            composite.visit_elist(&node, VisitPhase::Subsequent, &stack);
            composite.visit_elist(&node, VisitPhase::Closing, &stack);
        }
        assert_eq!(
            *log.borrow(),
            vec![
                "A.opening",
                "B.opening",
                "A.second",
                "B.second",
                "A.subsequent",
                "B.subsequent",
                "B.closing",
                "A.closing",
            ]
        );
    }

    #[test]
    fn push_forward_pop_reverse_returns_first_visitors_result() {
        let log: Log = Rc::default();
        let mut a = Named::new("A", &log);
        let mut b = Named::new("B", &log);
        let node = SyntaxNode::leaf(NodeKind::Ident, "x");
        let popped = {
            let mut composite = CompositeVisitor::new(Vec::new()).with(&mut a).with(&mut b);
            assert_eq!(composite.len(), 2);
            composite.push(&node);
            composite.pop()
        };
        assert_eq!(popped.map(SyntaxNode::text), Some("x"));
        assert_eq!(*log.borrow(), vec!["A.push", "B.push", "B.pop", "A.pop"]);
    }

    #[test]
    fn lifecycle_hooks_nest() {
        let log: Log = Rc::default();
        let mut a = Named::new("A", &log);
        let mut b = Named::new("B", &log);
        {
            let mut composite = CompositeVisitor::new(vec![&mut a as &mut dyn Visitor<'_>, &mut b]);
            composite.set_up();
            composite.tear_down();
        }
        assert_eq!(
            *log.borrow(),
            vec!["A.set_up", "B.set_up", "B.tear_down", "A.tear_down"]
        );
    }

    #[test]
    fn empty_composite_is_inert() {
        let node = SyntaxNode::new(NodeKind::Plus);
        let stack = TraversalStack::new();
        let mut composite = CompositeVisitor::new(Vec::new());
        assert!(composite.is_empty());
        composite.visit_plus(&node, VisitPhase::Opening, &stack);
        assert!(composite.pop().is_none());
    }
}
