//! Output channels and printers for the rendered report.
//!
//! Supports `human` (default) and `json` console outputs. When the host
//! provides step-summary and output-key channels (GitHub Actions), the
//! rendered report is appended to the step-summary file and exposed under
//! the `report` output key.

use crate::config::GithubContext;
use crate::error::ReportError;
use crate::report::Report;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs::OpenOptions;
use std::io::Write;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the report to the console in the requested format.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            println!("{}", report.markup);
            let status = format!(
                "— Summary — files={} passed={} warnings={} errors={}",
                report.summary.files,
                report.summary.pass_files,
                report.summary.warning_total,
                report.summary.error_total
            );
            if color {
                eprintln!("{}", status.bold());
            } else {
                eprintln!("{}", status);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "report": report.markup,
        "summary": report.summary,
    })
}

/// Append the rendered report to the host's step-summary file, if any.
pub fn write_step_summary(ctx: &GithubContext, markup: &str) -> Result<(), ReportError> {
    if let Some(path) = ctx.step_summary.as_deref() {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{markup}")?;
    }
    Ok(())
}

/// Expose `value` under `key` in the host's output file, if any. Uses the
/// heredoc form so multi-line report markup survives intact.
pub fn set_output(ctx: &GithubContext, key: &str, value: &str) -> Result<(), ReportError> {
    if let Some(path) = ctx.output_file.as_deref() {
        let delimiter = format!("ghadelimiter_{}", value.len());
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{key}<<{delimiter}")?;
        writeln!(file, "{value}")?;
        writeln!(file, "{delimiter}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunSummary;
    use std::fs;
    use tempfile::tempdir;

    fn report() -> Report {
        Report {
            markup: "<h2>ESLint Report</h2>\n".into(),
            summary: RunSummary {
                files: 2,
                pass_files: 1,
                warning_total: 3,
                warning_files: 1,
                warning_fixable: 1,
                error_total: 0,
                error_files: 0,
                error_fixable: 0,
                fatal_error_total: 0,
                fatal_error_files: 0,
            },
        }
    }

    #[test]
    fn test_compose_report_json_shape() {
        let out = compose_report_json(&report());
        assert_eq!(out["report"], "<h2>ESLint Report</h2>\n");
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["warning_total"], 3);
    }

    #[test]
    fn test_write_step_summary_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.html");
        let ctx = GithubContext {
            step_summary: Some(path.to_string_lossy().to_string()),
            ..GithubContext::default()
        };
        write_step_summary(&ctx, "<p>one</p>").unwrap();
        write_step_summary(&ctx, "<p>two</p>").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_set_output_uses_heredoc_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output");
        let ctx = GithubContext {
            output_file: Some(path.to_string_lossy().to_string()),
            ..GithubContext::default()
        };
        set_output(&ctx, "report", "line one\nline two").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let delimiter = "ghadelimiter_17";
        assert_eq!(
            written,
            format!("report<<{delimiter}\nline one\nline two\n{delimiter}\n")
        );
    }

    #[test]
    fn test_channels_are_noops_without_env_paths() {
        let ctx = GithubContext::default();
        write_step_summary(&ctx, "x").unwrap();
        set_output(&ctx, "report", "x").unwrap();
    }
}
