// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Source positions.
//!
//! Lines and columns are 1-based. A line of 0 marks a synthetic node that has
//! no location in the source text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line/column location in source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// True when the position carries no source location.
    pub fn is_synthetic(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end position of a node. Both ends are inclusive of the node text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A span covering `start_line:start_col` to `end_line:end_col`.
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    /// A zero-width span at one position.
    pub fn point(line: u32, column: u32) -> Self {
        let at = Position::new(line, column);
        Self::new(at, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_order_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 10));
        assert_eq!(Position::new(4, 4).to_string(), "4:4");
    }

    #[test]
    fn default_span_is_synthetic() {
        assert!(Span::default().start.is_synthetic());
        assert!(!Span::point(1, 1).start.is_synthetic());
    }
}
