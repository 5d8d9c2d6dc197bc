//! Input record schema and the run-wide summary accumulator.
//!
//! `FileRecord` and `DiagnosticRecord` mirror ESLint's JSON formatter output
//! (camelCase field names). They are immutable once deserialized; the derived
//! `FileReport`/`Issue` entities live in the submodules.

pub mod file;
pub mod issue;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One linted file's raw result as emitted by ESLint.
pub struct FileRecord {
    pub file_path: String,
    #[serde(default)]
    pub error_count: u64,
    #[serde(default)]
    pub fatal_error_count: u64,
    #[serde(default)]
    pub fixable_error_count: u64,
    #[serde(default)]
    pub warning_count: u64,
    #[serde(default)]
    pub fixable_warning_count: u64,
    #[serde(default)]
    pub messages: Vec<DiagnosticRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One reported problem at a source location.
///
/// `rule_id` and `message_id` are null for fatal parse errors, so they stay
/// optional here; entity construction rejects records without them.
pub struct DiagnosticRecord {
    #[serde(default)]
    pub rule_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub message_id: Option<String>,
    /// 0 = info, 1 = warning, 2 = error.
    pub severity: i64,
    pub line: u64,
    #[serde(default)]
    pub end_line: Option<u64>,
    pub column: u64,
    #[serde(default)]
    pub end_column: Option<u64>,
    /// Presence marks the diagnostic as auto-fixable; contents are unused.
    #[serde(default)]
    pub fix: Option<serde_json::Value>,
}

#[derive(Debug, Default, Clone, Serialize)]
/// Run-wide counters folded over all files.
///
/// Built incrementally via `FileReport::update_summary`, read-only afterward.
pub struct RunSummary {
    pub files: u64,
    pub pass_files: u64,
    pub warning_total: u64,
    pub warning_files: u64,
    pub warning_fixable: u64,
    pub error_total: u64,
    pub error_files: u64,
    pub error_fixable: u64,
    pub fatal_error_total: u64,
    pub fatal_error_files: u64,
}
