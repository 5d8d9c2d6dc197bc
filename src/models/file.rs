//! File entity: one linted source file's aggregate result.
//!
//! A `FileReport` owns its issues exclusively. Construction normalizes the
//! path, builds the blob URL from the host context, and computes `pass`;
//! nothing is mutated afterward, so every render is idempotent.

use crate::config::{GithubContext, ANCHOR_PREFIX, BLOB_SUBDIR};
use crate::error::ReportError;
use crate::markup::{self, pluralize, symbols, Cell};
use crate::models::issue::Issue;
use crate::models::{FileRecord, RunSummary};

#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path relative to the workspace root, forward slashes only.
    pub path: String,
    /// Source view URL for this file at the linted commit.
    pub url: String,
    pub error_count: u64,
    pub fatal_error_count: u64,
    pub fixable_error_count: u64,
    pub warning_count: u64,
    pub fixable_warning_count: u64,
    pub issues: Vec<Issue>,
    /// True iff the file produced no issues.
    pub pass: bool,
}

/// Strip the workspace prefix and leading separators, and canonicalize
/// backslashes so Windows-style input paths render as repo paths.
fn normalize_path(raw: &str, workspace: &str) -> String {
    let unified = raw.replace('\\', "/");
    let ws = workspace.replace('\\', "/");
    let stripped = if !ws.is_empty() {
        unified.strip_prefix(ws.as_str()).unwrap_or(&unified)
    } else {
        unified.as_str()
    };
    stripped.trim_start_matches('/').to_string()
}

impl FileReport {
    pub fn new(data: &FileRecord, ctx: &GithubContext) -> Result<Self, ReportError> {
        let path = normalize_path(&data.file_path, &ctx.workspace);
        let url = format!(
            "{}/{}/{}/{}/{}",
            ctx.server, ctx.repo, BLOB_SUBDIR, ctx.sha, path
        );
        let issues = data
            .messages
            .iter()
            .map(|message| Issue::new(message, &path))
            .collect::<Result<Vec<_>, _>>()?;
        let pass = issues.is_empty();
        Ok(FileReport {
            path,
            url,
            error_count: data.error_count,
            fatal_error_count: data.fatal_error_count,
            fixable_error_count: data.fixable_error_count,
            warning_count: data.warning_count,
            fixable_warning_count: data.fixable_warning_count,
            issues,
            pass,
        })
    }

    /// Fold this file into the run summary. Must be called exactly once per
    /// file per report; the accumulator is threaded through and returned.
    pub fn update_summary(&self, mut acc: RunSummary) -> RunSummary {
        acc.files += 1;
        if self.pass {
            acc.pass_files += 1;
        }
        if self.warning_count > 0 {
            acc.warning_files += 1;
            acc.warning_total += self.warning_count;
            acc.warning_fixable += self.fixable_warning_count;
        }
        if self.error_count > 0 {
            acc.error_files += 1;
            acc.error_total += self.error_count;
            acc.error_fixable += self.fixable_error_count;
        }
        if self.fatal_error_count > 0 {
            acc.fatal_error_files += 1;
            acc.fatal_error_total += self.fatal_error_count;
        }
        acc
    }

    /// Heading: linked path plus the present (nonzero) issue-count phrases.
    /// Errors come before warnings; the error phrase carries a parenthetical
    /// fatal/fixable appendix, each part included only when nonzero.
    pub fn to_heading(&self) -> String {
        let mut phrases: Vec<String> = Vec::new();
        if self.error_count > 0 {
            let mut phrase = format!(
                "{} {}",
                self.error_count,
                pluralize(self.error_count, "error")
            );
            let mut appendix: Vec<String> = Vec::new();
            if self.fatal_error_count > 0 {
                appendix.push(format!("{} fatal", self.fatal_error_count));
            }
            if self.fixable_error_count > 0 {
                appendix.push(format!("{} fixable", self.fixable_error_count));
            }
            if !appendix.is_empty() {
                phrase.push_str(&format!(" ({})", appendix.join(", ")));
            }
            phrases.push(phrase);
        }
        if self.warning_count > 0 {
            phrases.push(format!(
                "{} {}",
                self.warning_count,
                pluralize(self.warning_count, "warning")
            ));
        }
        format!(
            "{}: {}",
            markup::to_link(&self.path, &self.url, true),
            phrases.join(", ")
        )
    }

    /// Issue table for this file, or an empty string for a passing file.
    /// The table id is the lower-cased path, which keeps the summary-row
    /// anchor link stable.
    pub fn to_table(&self) -> String {
        if self.pass {
            return String::new();
        }
        let mut rows: Vec<Vec<Cell>> = vec![vec![
            Cell::Header("Severity".into()),
            Cell::Header("Line".into()),
            Cell::Header("Column".into()),
            Cell::Header("Message".into()),
            Cell::Header("Fixable".into()),
            Cell::Header("Rule".into()),
        ]];
        for issue in &self.issues {
            rows.push(issue.to_row(self));
        }
        markup::to_custom_table(&rows, &self.path.to_lowercase())
    }

    /// Collapsible detail block: heading inside the clickable summary
    /// control, followed by the issue table. Only meaningful for files with
    /// issues; callers filter.
    pub fn to_section(&self) -> String {
        let heading = markup::wrap(&self.to_heading(), "h3", false, &[]);
        let control = markup::wrap(&heading, "summary", true, &[]);
        markup::wrap(&format!("{}{}", control, self.to_table()), "details", true, &[])
    }

    /// Four-cell summary-table row: path (linked to the detail section for
    /// failing files), warning count, error count with optional fatal note,
    /// and the pass/fail glyph.
    pub fn to_row(&self) -> Vec<Cell> {
        let path_cell = if self.pass {
            Cell::Plain(self.path.clone())
        } else {
            let anchor = format!("#{}{}", ANCHOR_PREFIX, self.path.to_lowercase());
            Cell::Plain(markup::to_link(&self.path, &anchor, true))
        };
        let errors = if self.fatal_error_count > 0 {
            format!("{} ({} fatal)", self.error_count, self.fatal_error_count)
        } else {
            self.error_count.to_string()
        };
        let glyph = if self.pass { symbols::PASS } else { symbols::ERROR };
        vec![
            path_cell,
            Cell::Plain(self.warning_count.to_string()),
            Cell::Plain(errors),
            Cell::Plain(glyph.to_string()),
        ]
    }
}
