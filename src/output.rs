//! JSON response types for the cstwalk CLI.
//!
//! Every command that reports structured data writes exactly one response
//! object to stdout. Failures use [`ErrorResponse`] with the same
//! `status`/`schema_version` envelope.

use std::io::{self, Write};

use serde::Serialize;

use cstwalk_cst::{Event, Position, Traversal, TraversalError, TraversalReport};

use crate::error::{CliError, OutputErrorCode};

/// Version of the response layout. Bumped on incompatible changes.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Responses
// ============================================================================

/// Response for `events`.
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub status: String,
    pub schema_version: String,
    pub traversal: String,
    pub report: TraversalReport,
    pub events: Vec<Event>,
}

impl EventsResponse {
    pub fn new(traversal: Traversal, report: TraversalReport, events: Vec<Event>) -> Self {
        EventsResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            traversal: traversal.name().to_string(),
            report,
            events,
        }
    }
}

/// Outcome of one walk inside a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct WalkCheck {
    pub traversal: String,
    pub report: TraversalReport,
    /// Every `Opening` had a matching `Closing` in the right order.
    pub well_nested: bool,
}

/// Response for `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub status: String,
    pub schema_version: String,
    /// Nodes in the input tree. A walk passes when it opened or skipped
    /// each of them.
    pub nodes: usize,
    pub walks: Vec<WalkCheck>,
}

impl CheckResponse {
    pub fn new(nodes: usize, walks: Vec<WalkCheck>) -> Self {
        let ok = walks
            .iter()
            .all(|w| w.well_nested && w.report.nodes + w.report.skipped == nodes);
        CheckResponse {
            status: if ok { "ok" } else { "failed" }.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            nodes,
            walks,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error details in an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: u8,
    pub message: String,
    /// Kind of the node where a traversal failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl ErrorInfo {
    pub fn from_error(err: &CliError) -> Self {
        let (kind, position) = match err {
            CliError::Traversal(inner) => traversal_location(inner),
            _ => (None, None),
        };
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
            kind,
            position,
        }
    }
}

fn traversal_location(err: &TraversalError) -> (Option<String>, Option<Position>) {
    (Some(err.kind().to_string()), Some(err.position()))
}

/// Response written when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub schema_version: String,
    pub error: ErrorInfo,
}

impl ErrorResponse {
    pub fn from_error(err: &CliError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cstwalk_cst::{MismatchReason, NodeKind};

    fn report(nodes: usize) -> TraversalReport {
        TraversalReport {
            nodes,
            events: nodes * 2,
            ..TraversalReport::default()
        }
    }

    #[test]
    fn check_fails_when_a_walk_misses_nodes() {
        let walks = vec![
            WalkCheck {
                traversal: "source".to_string(),
                report: report(3),
                well_nested: true,
            },
            WalkCheck {
                traversal: "flat".to_string(),
                report: report(2),
                well_nested: true,
            },
        ];
        let response = CheckResponse::new(3, walks);
        assert!(!response.is_ok());
        assert_eq!(response.status, "failed");
    }

    #[test]
    fn traversal_errors_carry_location() {
        let err = CliError::from(TraversalError::mismatch(
            NodeKind::Slist,
            Position::new(2, 5),
            MismatchReason::Unconsumed { remaining: 1 },
        ));
        let json = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["code"], 4);
        assert_eq!(json["error"]["kind"], "SLIST");
        assert_eq!(json["error"]["position"]["line"], 2);
    }

    #[test]
    fn input_errors_omit_location() {
        let err = CliError::invalid_args("bad indent");
        let json = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();
        assert_eq!(json["error"]["code"], 2);
        assert!(json["error"].get("kind").is_none());
    }

    #[test]
    fn emit_writes_one_document() {
        let mut out = Vec::new();
        let response = CheckResponse::new(0, Vec::new());
        emit_response(&response, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"schema_version\": \"1\""));
    }
}
