//! Error types and exit codes for the cstwalk CLI.
//!
//! Engine errors and I/O failures are bridged into a single [`CliError`]
//! so every command fails the same way: a JSON error response on stdout
//! and an [`OutputErrorCode`] as the process exit code.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad flag values)
//! - `3`: Input errors (tree file missing, unreadable or malformed)
//! - `4`: Traversal failed (structural mismatch, depth limit)
//! - `10`: Internal errors (output serialization, unexpected state)

use std::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

use cstwalk_cst::TraversalError;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable error codes used as exit codes and in JSON error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// The input tree could not be loaded.
    InputError = 3,
    /// The walk over a loaded tree failed.
    TraversalFailed = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The tree file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The tree file is not a JSON array of nodes.
    #[error("malformed tree in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("internal error: {message}")]
    InternalError { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&CliError> for OutputErrorCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            CliError::Read { .. } | CliError::Parse { .. } => OutputErrorCode::InputError,
            CliError::Traversal(_) => OutputErrorCode::TraversalFailed,
            CliError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

// ============================================================================
// Bridges
// ============================================================================

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("JSON error: {err}"))
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl CliError {
    pub fn invalid_args(message: impl Into<String>) -> Self {
        CliError::InvalidArguments {
            message: message.into(),
        }
    }

    pub fn read(path: &Path, source: io::Error) -> Self {
        CliError::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        CliError::Parse {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CliError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
