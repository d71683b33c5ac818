//! cstwalk: source-order traversal and printing of Groovy syntax trees.
//!
//! The engine lives in the `cstwalk-cst` crate and is re-exported here as
//! [`cst`]. This crate adds the `cstwalk` command-line front end.

pub use cstwalk_cst as cst;

// Front door
pub mod cli;

// Error codes and JSON responses
pub mod error;
pub mod output;
