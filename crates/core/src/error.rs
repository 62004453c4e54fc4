//! Error types for kinship queries
//!
//! One taxonomy shared by every crate in the workspace. We use `thiserror`
//! for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for kinship operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for report queries
///
/// Policy summary (enforced by the report drivers):
/// - `InputAborted` and `MalformedDate` are fatal before any output resource
///   is opened.
/// - `Sink` failures on individual writes are logged and counted but do not
///   abort the remaining matching work; a failed close or post-process step
///   is the driver's final reported error.
/// - "No matches" is never an error; an empty report body is valid output.
#[derive(Debug, Error)]
pub enum Error {
    /// The user cancelled a required prompt; the report stops before any
    /// output resource is opened.
    #[error("input aborted: report cancelled at prompt")]
    InputAborted,

    /// A supplied date or year could not be parsed into interval boundaries.
    /// Fatal to the whole query, never downgraded to a per-record skip.
    #[error("malformed date: {input:?}")]
    MalformedDate {
        /// The rejected input text
        input: String,
    },

    /// Failure writing to, closing, or post-processing the output resource
    #[error("output sink error: {0}")]
    Sink(#[from] io::Error),

    /// The external record source reported a failure
    #[error("record source error: {0}")]
    Record(String),

    /// Invalid report configuration file
    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Convenience constructor for record-source failures
    pub fn record(msg: impl Into<String>) -> Self {
        Error::Record(msg.into())
    }
}
