//! Issue entity: one diagnostic bound to its owning file.
//!
//! Formatting state is computed once at construction (severity label,
//! pipe-escaped text, line/column ranges) and never mutated afterward.

use crate::error::ReportError;
use crate::markup::{self, symbols, Cell};
use crate::models::file::FileReport;
use crate::models::DiagnosticRecord;

const FIX_HOVER: &str = "ESLint reported this issue as fixable";
const NO_FIX_HOVER: &str = "ESLint did not report this issue as fixable";

#[derive(Debug, Clone)]
/// A single diagnostic prepared for table rendering.
pub struct Issue {
    pub severity: String,
    pub ln_range: (u64, u64),
    pub col_range: (u64, u64),
    pub message: String,
    pub message_type: String,
    pub rule_id: String,
    pub fixable: bool,
}

/// Escape pipes so cell text cannot collide with table delimiters in any
/// Markdown fallback rendering of the report.
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Issue {
    /// Build an issue from a raw diagnostic. `file_path` is only used for
    /// error context when a required field is absent.
    pub fn new(data: &DiagnosticRecord, file_path: &str) -> Result<Self, ReportError> {
        let rule_id = data.rule_id.as_deref().ok_or_else(|| ReportError::MalformedRecord {
            file: file_path.to_string(),
            field: "ruleId",
        })?;
        let message_type = data.message_id.as_deref().ok_or_else(|| {
            ReportError::MalformedRecord {
                file: file_path.to_string(),
                field: "messageId",
            }
        })?;

        let severity = if data.severity > 0 {
            if data.severity > 1 {
                format!("{} Error", symbols::ERROR)
            } else {
                format!("{} Warn", symbols::WARN)
            }
        } else {
            format!("{} Info", symbols::INFO)
        };

        Ok(Issue {
            severity,
            ln_range: (data.line, data.end_line.unwrap_or(data.line)),
            col_range: (data.column, data.end_column.unwrap_or(data.column)),
            message: escape_pipes(&data.message),
            message_type: escape_pipes(message_type),
            rule_id: escape_pipes(rule_id),
            fixable: data.fix.is_some(),
        })
    }

    /// Render the six display cells for this issue. The owner is only read
    /// for its blob URL, never mutated; the call is idempotent.
    pub fn to_row(&self, owner: &FileReport) -> Vec<Cell> {
        let (start, end) = self.ln_range;
        let (line_text, anchor) = if start == end {
            (start.to_string(), format!("#L{start}"))
        } else {
            (format!("{start}:{end}"), format!("#L{start}-L{end}"))
        };
        let line_link = markup::to_link(&line_text, &format!("{}{anchor}", owner.url), true);

        let (fix_symbol, fix_title) = if self.fixable {
            (symbols::FIX, FIX_HOVER)
        } else {
            (symbols::NO_FIX, NO_FIX_HOVER)
        };

        vec![
            Cell::Attributed(
                self.severity.clone(),
                vec![("align".into(), "center".into())],
            ),
            Cell::Plain(line_link),
            Cell::Plain(self.col_range.0.to_string()),
            Cell::Plain(markup::convert_inline_code(&self.message, false)),
            Cell::Attributed(
                fix_symbol.to_string(),
                vec![
                    ("align".into(), "center".into()),
                    ("title".into(), fix_title.into()),
                ],
            ),
            Cell::Plain(markup::convert_inline_code(
                &format!("`{}` (`{}`)", self.message_type, self.rule_id),
                false,
            )),
        ]
    }
}
