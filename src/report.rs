//! End-to-end report assembly.
//!
//! Parses the ESLint JSON input (inline text or a file path), maps every
//! per-file record into a `FileReport` in input order, folds the run summary
//! through an explicit accumulator, and renders the title, aggregate summary
//! list, summary table, and one collapsible detail section per failing file.
//! Order is preserved throughout; nothing is re-sorted.

use crate::config::GithubContext;
use crate::error::ReportError;
use crate::markup::{self, pluralize, symbols, Cell, ListNode};
use crate::models::file::FileReport;
use crate::models::{FileRecord, RunSummary};
use std::fs;
use std::path::Path;

/// The fully rendered artifact plus the finalized run summary.
pub struct Report {
    pub markup: String,
    pub summary: RunSummary,
}

/// Incremental buffer for the rendered report: headings, raw fragments, and
/// tables, appended in order.
#[derive(Default)]
pub struct ReportBuffer {
    buf: String,
}

impl ReportBuffer {
    pub fn new() -> Self {
        ReportBuffer::default()
    }

    pub fn add_heading(&mut self, text: &str, level: u8) {
        let tag = format!("h{level}");
        self.buf.push_str(&markup::wrap(text, &tag, true, &[]));
    }

    pub fn add_raw(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }

    pub fn add_table(&mut self, rows: &[Vec<Cell>]) {
        self.buf.push_str(&markup::to_custom_table(rows, ""));
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Parse ESLint results from inline JSON or a path to a JSON document.
/// Path existence is checked first to distinguish the two forms. JSON `null`
/// is rejected; an empty result array is a valid (all-clean) run.
pub fn parse_results(input: &str) -> Result<Vec<FileRecord>, ReportError> {
    let text = if Path::new(input).exists() {
        fs::read_to_string(input)?
    } else {
        input.to_string()
    };
    let records: Option<Vec<FileRecord>> = serde_json::from_str(&text)?;
    records.ok_or(ReportError::EmptyInput)
}

/// Build and render the full report from parsed records.
pub fn render_report(
    records: &[FileRecord],
    title: &str,
    ctx: &GithubContext,
) -> Result<Report, ReportError> {
    let files = records
        .iter()
        .map(|record| FileReport::new(record, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = RunSummary::default();
    let mut table: Vec<Vec<Cell>> = vec![vec![
        Cell::Header("File".into()),
        Cell::Header("Warnings".into()),
        Cell::Header("Errors".into()),
        Cell::Header("Result".into()),
    ]];
    let mut problem_files: Vec<&FileReport> = Vec::new();
    for file in &files {
        table.push(file.to_row());
        summary = file.update_summary(summary);
        if !file.pass {
            problem_files.push(file);
        }
    }

    let mut buf = ReportBuffer::new();
    buf.add_heading(title, 2);
    buf.add_heading("Summary", 3);
    buf.add_raw(&markup::to_nested_ul(&summary_list(&summary)));
    buf.add_table(&table);
    for file in &problem_files {
        buf.add_raw(&file.to_section());
    }

    Ok(Report {
        markup: buf.finish(),
        summary,
    })
}

/// Aggregate summary list: file/pass counts, then warning and error totals,
/// each with a sub-list only when the corresponding total is nonzero.
fn summary_list(data: &RunSummary) -> Vec<ListNode> {
    let fix_command = markup::to_code("--fix", true, "p", &[]);

    let mut list = vec![
        ListNode::Item(format!(
            "{} {} {} linted",
            symbols::FILE,
            data.files,
            pluralize(data.files, "file")
        )),
        ListNode::Item(format!(
            "{} {} {} had no issues",
            symbols::PASS,
            data.pass_files,
            pluralize(data.pass_files, "file")
        )),
        ListNode::Item(format!(
            "{} {} total {}",
            symbols::WARN,
            data.warning_total,
            pluralize(data.warning_total, "warning")
        )),
    ];
    if data.warning_total > 0 {
        list.push(ListNode::List(vec![
            ListNode::Item(format!(
                "{} individual {} contained warnings",
                data.warning_files,
                pluralize(data.warning_files, "file")
            )),
            ListNode::Item(format!(
                "{} {} can be fixed using {}",
                data.warning_fixable,
                pluralize(data.warning_fixable, "warning"),
                fix_command
            )),
        ]));
    }
    list.push(ListNode::Item(format!(
        "{} {} total {}",
        symbols::ERROR,
        data.error_total,
        pluralize(data.error_total, "error")
    )));
    if data.error_total > 0 {
        let mut sub = vec![
            ListNode::Item(format!(
                "{} individual {} contained errors",
                data.error_files,
                pluralize(data.error_files, "file")
            )),
            ListNode::Item(format!(
                "{} {} can be fixed using {}",
                data.error_fixable,
                pluralize(data.error_fixable, "error"),
                fix_command
            )),
            ListNode::Item(format!(
                "{} total {}",
                data.fatal_error_total,
                pluralize(data.fatal_error_total, "fatal error")
            )),
        ];
        if data.fatal_error_total > 0 {
            sub.push(ListNode::List(vec![ListNode::Item(format!(
                "{} individual {} contained fatal errors",
                data.fatal_error_files,
                pluralize(data.fatal_error_files, "file")
            ))]));
        }
        list.push(ListNode::List(sub));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn ctx() -> GithubContext {
        GithubContext {
            server: "https://github.com".into(),
            repo: "acme/app".into(),
            sha: "deadbeef".into(),
            workspace: String::new(),
            step_summary: None,
            output_file: None,
        }
    }

    const ONE_CLEAN_FILE: &str = r#"[{"filePath":"a.js","errorCount":0,"fatalErrorCount":0,"warningCount":0,"messages":[]}]"#;

    #[test]
    fn test_parse_results_inline_json() {
        let records = parse_results(ONE_CLEAN_FILE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_path, "a.js");
    }

    #[test]
    fn test_parse_results_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{ONE_CLEAN_FILE}").unwrap();
        let records = parse_results(&path.to_string_lossy()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_results_rejects_null_and_garbage() {
        match parse_results("null") {
            Err(ReportError::EmptyInput) => {}
            other => panic!("expected EmptyInput, got {other:?}"),
        }
        assert!(matches!(
            parse_results("not json at all"),
            Err(ReportError::InputParse(_))
        ));
    }

    #[test]
    fn test_round_trip_single_passing_file() {
        let records = parse_results(ONE_CLEAN_FILE).unwrap();
        let report = render_report(&records, "ESLint Report", &ctx()).unwrap();
        assert_eq!(report.summary.files, 1);
        assert_eq!(report.summary.pass_files, 1);
        assert_eq!(report.summary.error_total, 0);
        // Summary table: header row plus one passing row, no detail section.
        assert_eq!(report.markup.matches("<tr>").count(), 2);
        assert!(report.markup.contains("<td>a.js</td>"));
        assert!(report.markup.contains(symbols::PASS));
        assert!(!report.markup.contains("<details>"));
    }

    #[test]
    fn test_render_report_structure_and_order() {
        let input = r#"[
            {"filePath":"b.js","errorCount":1,"fatalErrorCount":0,"fixableErrorCount":0,
             "warningCount":0,"fixableWarningCount":0,
             "messages":[{"ruleId":"semi","message":"Missing semicolon.","messageId":"missingSemi",
                          "severity":2,"line":3,"endLine":3,"column":1,"endColumn":2}]},
            {"filePath":"a.js","errorCount":0,"fatalErrorCount":0,"warningCount":0,"messages":[]}
        ]"#;
        let records = parse_results(input).unwrap();
        let report = render_report(&records, "My lint run", &ctx()).unwrap();
        assert!(report.markup.starts_with("<h2>My lint run</h2>\n<h3>Summary</h3>\n<ul>"));
        // Input order is preserved: b.js's row comes before a.js's.
        let b_pos = report.markup.find("b.js").unwrap();
        let a_pos = report.markup.find("<td>a.js</td>").unwrap();
        assert!(b_pos < a_pos);
        // Exactly one detail section, for the failing file.
        assert_eq!(report.markup.matches("<details>").count(), 1);
        assert!(report.markup.contains("<table id=\"b.js\">"));
    }

    #[test]
    fn test_malformed_record_aborts_rendering() {
        let input = r#"[{"filePath":"a.js","errorCount":1,"fatalErrorCount":1,"warningCount":0,
            "messages":[{"ruleId":null,"message":"Parsing error.","messageId":null,
                         "severity":2,"line":1,"column":1}]}]"#;
        let records = parse_results(input).unwrap();
        assert!(matches!(
            render_report(&records, "t", &ctx()),
            Err(ReportError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_summary_list_sublists_follow_totals() {
        let empty = RunSummary::default();
        let list = summary_list(&empty);
        // files, pass, warnings, errors — no sub-lists when totals are zero.
        assert_eq!(list.len(), 4);

        let busy = RunSummary {
            files: 2,
            pass_files: 0,
            warning_total: 1,
            warning_files: 1,
            warning_fixable: 0,
            error_total: 3,
            error_files: 2,
            error_fixable: 1,
            fatal_error_total: 1,
            fatal_error_files: 1,
        };
        let rendered = markup::to_nested_ul(&summary_list(&busy));
        assert!(rendered.contains("1 individual file contained warnings"));
        assert!(rendered.contains("1 error can be fixed using <code>--fix</code>"));
        assert!(rendered.contains("1 total fatal error"));
        assert!(rendered.contains("1 individual file contained fatal errors"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = parse_results(ONE_CLEAN_FILE).unwrap();
        let first = render_report(&records, "t", &ctx()).unwrap();
        let second = render_report(&records, "t", &ctx()).unwrap();
        assert_eq!(first.markup, second.markup);
    }
}
