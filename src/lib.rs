//! eslint-summary core library.
//!
//! Renders ESLint's JSON formatter output into an HTML report suited to a
//! CI job's summary surface (e.g. the GitHub Actions step summary), so
//! engineers can review lint results without opening raw JSON.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Input resolution and host environment lookups.
//! - `markup`: HTML fragment helpers (wrapping, links, code spans, tables, lists).
//! - `models`: Input record schema, the File/Issue entities, and the run summary.
//! - `report`: Parsing, entity assembly, and report rendering.
//! - `output`: Human/JSON printers plus the host output channels.
//! - `error`: Error taxonomy for parse, record, and host I/O failures.
//! - `utils`: Supporting console helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod markup;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
