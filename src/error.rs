//! Error taxonomy for the report pipeline.
//!
//! Every failure during parsing, entity construction, or rendering is
//! surfaced unwrapped to the binary, which reports the message and halts.
//! No partial report is ever emitted and nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Input is not valid ESLint JSON.
    #[error("input could not be parsed as ESLint JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    /// Input parsed to JSON `null`; there are no results to report.
    #[error("ESLint results are empty; nothing to report")]
    EmptyInput,

    /// A per-diagnostic record is missing a field a formatting step needs.
    #[error("diagnostic in '{file}' is missing '{field}'")]
    MalformedRecord { file: String, field: &'static str },

    /// Reading the input path or writing a host output channel failed.
    #[error("host I/O failed: {0}")]
    HostIo(#[from] std::io::Error),

    /// A required input was provided neither on the CLI nor via `INPUT_*`.
    #[error("missing required input '{0}'")]
    MissingInput(&'static str),
}
