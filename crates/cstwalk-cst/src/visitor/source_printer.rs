// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Renders a tree back to Groovy-like source text.
//!
//! The printer relies on the source-order walk: every event arrives at the
//! point in the text where its token belongs, so printing is mostly a matter
//! of appending each node's fixed token (see the token table) at the right
//! phase. Blocks, closures, switch bodies and interpolated strings keep a
//! little extra state.
//!
//! Line breaks are never written eagerly. A break is requested and then
//! written, together with indentation, just before the next visible text,
//! which keeps trailing whitespace out of the output.

use super::stack::TraversalStack;
use super::tokens::{keyword, tokens_for};
use super::traits::{VisitPhase, Visitor};
use crate::nodes::{NodeKind, SyntaxNode};

/// Layout options for [`SourcePrinter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Start a new line whenever the next token comes from a later source
    /// line, keeping one blank line where the source had any.
    pub follow_lines: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            follow_lines: true,
        }
    }
}

impl PrinterConfig {
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_follow_lines(mut self, follow_lines: bool) -> Self {
        self.follow_lines = follow_lines;
        self
    }
}

/// Visitor that writes source text into a `String`.
///
/// A printer is good for one walk; its state is not reset by `set_up`.
#[derive(Debug, Default)]
pub struct SourcePrinter {
    config: PrinterConfig,
    out: String,
    level: usize,
    last_line: u32,
    pending_breaks: usize,
    /// Nodes accepted and not yet popped, from the `push`/`pop` hooks.
    open_nodes: usize,
    /// One counter per open interpolated string: parts seen so far.
    string_parts: Vec<usize>,
    /// One cursor per open block: index of the child being printed.
    block_cursor: Vec<usize>,
}

impl SourcePrinter {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    // ========================================================================
    // Output primitives
    // ========================================================================

    fn request_break(&mut self, count: usize) {
        self.pending_breaks = self.pending_breaks.max(count);
    }

    fn follow(&mut self, line: u32) {
        if line == 0 {
            return;
        }
        if self.config.follow_lines && self.last_line != 0 && line > self.last_line {
            let count = if line > self.last_line + 1 { 2 } else { 1 };
            self.request_break(count);
        }
        self.last_line = self.last_line.max(line);
    }

    fn write(&mut self, line: u32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.follow(line);
        let mut text = text;
        if self.pending_breaks > 0 && !self.out.is_empty() {
            let trimmed = self.out.trim_end_matches(' ').len();
            self.out.truncate(trimmed);
            for _ in 0..self.pending_breaks {
                self.out.push('\n');
            }
            for _ in 0..self.level * self.config.indent {
                self.out.push(' ');
            }
            text = text.trim_start();
        }
        self.pending_breaks = 0;
        self.out.push_str(text);
    }

    fn line_for(node: &SyntaxNode, phase: VisitPhase) -> u32 {
        if phase.is_closing() {
            node.span().end.line
        } else {
            node.span().start.line
        }
    }

    /// Writes `{`, separated from preceding text by a space.
    fn open_brace(&mut self, line: u32) {
        let glued = self.pending_breaks > 0
            || self.out.is_empty()
            || self.out.ends_with(|c: char| c.is_whitespace() || c == '(' || c == '[');
        if glued {
            self.write(line, "{");
        } else {
            self.write(line, " {");
        }
    }

    fn indent(&mut self) {
        self.level += 1;
        self.request_break(1);
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.request_break(1);
    }

    // ========================================================================
    // Per-kind printing
    // ========================================================================

    /// Prints a statement block: `SLIST` or a class body.
    fn block(&mut self, node: &SyntaxNode, phase: VisitPhase) {
        let line = Self::line_for(node, phase);
        match phase {
            VisitPhase::Opening => {
                self.open_brace(line);
                self.block_cursor.push(0);
                if node.has_children() {
                    self.indent();
                }
            }
            VisitPhase::Second | VisitPhase::Subsequent => {
                let index = self.block_cursor.last().copied().unwrap_or(0) + 1;
                if let Some(cursor) = self.block_cursor.last_mut() {
                    *cursor = index;
                }
                let prev = node.child_at(index - 1).map(SyntaxNode::kind);
                let next = node.child_at(index).map(SyntaxNode::kind);
                match (prev, next) {
                    (Some(NodeKind::EnumConstantDef), Some(NodeKind::EnumConstantDef)) => {
                        self.write(line, ",");
                    }
                    (Some(NodeKind::EnumConstantDef), Some(_)) => self.write(line, ";"),
                    _ => {}
                }
                self.request_break(1);
            }
            VisitPhase::Closing => {
                self.block_cursor.pop();
                if node.has_children() {
                    self.dedent();
                }
                self.write(line, "}");
            }
        }
    }

    /// Prints a node whose text is fixed by its kind and position.
    fn fixed(&mut self, node: &SyntaxNode, phase: VisitPhase, stack: &TraversalStack<'_>) {
        let tokens = tokens_for(node, stack);
        // Closing tokens of these kinds sit mid-node (`if (x) ...`), so only
        // the start line is meaningful.
        let line = node.span().start.line;
        match phase {
            VisitPhase::Opening if tokens.open.is_empty() => {
                let text = if node.text().is_empty() {
                    keyword(node.kind()).unwrap_or_default()
                } else {
                    node.text()
                };
                self.write(line, text);
            }
            VisitPhase::Opening => self.write(line, tokens.open),
            VisitPhase::Second => self.write(line, tokens.second),
            VisitPhase::Subsequent => self.write(line, tokens.sub),
            VisitPhase::Closing => {
                self.write(line, tokens.close);
                // Each `case` label of a group sits on its own line.
                if matches!(node.kind(), NodeKind::LiteralCase | NodeKind::LiteralDefault)
                    && stack.parent_kind() == Some(NodeKind::CaseGroup)
                {
                    self.request_break(1);
                }
            }
        }
    }
}

impl<'a> Visitor<'a> for SourcePrinter {
    fn tear_down(&mut self) {
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
    }

    fn push(&mut self, _node: &'a SyntaxNode) {
        // Top-level statements have no separator events of their own.
        if self.open_nodes == 0 && !self.out.is_empty() {
            self.request_break(1);
        }
        self.open_nodes += 1;
    }

    fn pop(&mut self) -> Option<&'a SyntaxNode> {
        self.open_nodes = self.open_nodes.saturating_sub(1);
        None
    }

    fn visit_default(
        &mut self,
        node: Option<&'a SyntaxNode>,
        phase: VisitPhase,
        stack: &TraversalStack<'a>,
    ) {
        if let Some(node) = node {
            self.fixed(node, phase, stack);
        }
    }

    fn visit_slist(&mut self, node: &'a SyntaxNode, phase: VisitPhase, _: &TraversalStack<'a>) {
        self.block(node, phase);
    }

    fn visit_objblock(&mut self, node: &'a SyntaxNode, phase: VisitPhase, _: &TraversalStack<'a>) {
        self.block(node, phase);
    }

    fn visit_closable_block(
        &mut self,
        node: &'a SyntaxNode,
        phase: VisitPhase,
        _: &TraversalStack<'a>,
    ) {
        let line = Self::line_for(node, phase);
        let has_params = node
            .child_at(0)
            .is_some_and(|c| c.kind() == NodeKind::Parameters && c.has_children());
        let has_body = node.children().len() > 1;
        match phase {
            VisitPhase::Opening => {
                self.open_brace(line);
                if has_params {
                    self.write(line, " ");
                }
            }
            VisitPhase::Second => {
                if has_params {
                    self.write(line, " ->");
                }
                if has_body {
                    self.indent();
                }
            }
            VisitPhase::Subsequent => self.request_break(1),
            VisitPhase::Closing => {
                if has_body {
                    self.dedent();
                }
                self.write(line, "}");
            }
        }
    }

    fn visit_literal_switch(
        &mut self,
        node: &'a SyntaxNode,
        phase: VisitPhase,
        _: &TraversalStack<'a>,
    ) {
        let line = Self::line_for(node, phase);
        match phase {
            VisitPhase::Opening => self.write(line, "switch ("),
            VisitPhase::Second => {
                self.write(line, ") {");
                self.indent();
            }
            VisitPhase::Subsequent => {}
            VisitPhase::Closing => {
                self.dedent();
                self.write(line, "}");
            }
        }
    }

    fn visit_case_group(&mut self, _node: &'a SyntaxNode, phase: VisitPhase, _: &TraversalStack<'a>) {
        match phase {
            VisitPhase::Opening => self.indent(),
            VisitPhase::Second | VisitPhase::Subsequent => self.request_break(1),
            VisitPhase::Closing => self.dedent(),
        }
    }

    fn visit_string_constructor(
        &mut self,
        node: &'a SyntaxNode,
        phase: VisitPhase,
        _: &TraversalStack<'a>,
    ) {
        let line = Self::line_for(node, phase);
        match phase {
            VisitPhase::Opening => {
                self.string_parts.push(0);
                self.write(line, "\"");
            }
            VisitPhase::Second | VisitPhase::Subsequent => {
                let part = self.string_parts.last().copied().unwrap_or(0);
                self.write(line, if part % 2 == 0 { "${" } else { "}" });
                if let Some(counter) = self.string_parts.last_mut() {
                    *counter += 1;
                }
            }
            VisitPhase::Closing => {
                if self.string_parts.pop().is_some_and(|part| part % 2 == 1) {
                    self.write(line, "}");
                }
                self.write(line, "\"");
            }
        }
    }

    fn visit_string_literal(
        &mut self,
        node: &'a SyntaxNode,
        phase: VisitPhase,
        stack: &TraversalStack<'a>,
    ) {
        if phase != VisitPhase::Opening {
            return;
        }
        let line = Self::line_for(node, phase);
        if stack.parent_kind() == Some(NodeKind::StringConstructor) {
            self.write(line, node.text());
        } else {
            let quoted = format!("\"{}\"", escape(node.text()));
            self.write(line, &quoted);
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_are_lazy_and_trim_trailing_spaces() {
        let mut printer = SourcePrinter::new(PrinterConfig::default().with_indent(2));
        printer.write(0, "a = ");
        printer.indent();
        printer.write(0, "  b");
        assert_eq!(printer.output(), "a =\n  b");
    }

    #[test]
    fn follow_lines_keeps_one_blank_line() {
        let mut printer = SourcePrinter::new(PrinterConfig::default());
        printer.write(1, "x");
        printer.write(5, "y");
        printer.write(6, "z");
        assert_eq!(printer.output(), "x\n\ny\nz");
    }

    #[test]
    fn follow_lines_can_be_disabled() {
        let mut printer = SourcePrinter::new(PrinterConfig::default().with_follow_lines(false));
        printer.write(1, "x");
        printer.write(3, "y");
        assert_eq!(printer.output(), "xy");
    }

    #[test]
    fn brace_spacing() {
        let mut printer = SourcePrinter::default();
        printer.write(0, "else ");
        printer.open_brace(0);
        printer.write(0, ")");
        printer.open_brace(0);
        assert_eq!(printer.output(), "else {) {");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape(r#"say "hi"\"#), r#"say \"hi\"\\"#);
    }
}
