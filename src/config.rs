//! Input resolution and host environment lookups.
//!
//! Inputs follow the GitHub Actions convention: an action input named `json`
//! arrives as the `INPUT_JSON` environment variable. CLI flags take
//! precedence so the tool also works outside a workflow.
//!
//! Defaults:
//! - `title`: "ESLint Report"
//! - `output`: `human`
//!
//! Overrides precedence: CLI > environment > defaults.

use crate::error::ReportError;
use std::env;

/// Repository subpath under which a commit's file tree is served.
pub const BLOB_SUBDIR: &str = "blob";
/// Prefix GitHub adds to user-supplied element ids in rendered summaries.
/// Anchor links break if this does not match the rendering host exactly.
pub const ANCHOR_PREFIX: &str = "user-content-";
pub const DEFAULT_TITLE: &str = "ESLint Report";

#[derive(Debug, Clone)]
/// Fully-resolved inputs used by the pipeline after applying precedence.
pub struct Inputs {
    /// ESLint results: inline JSON or a path to a JSON document.
    pub json: String,
    /// Report heading text.
    pub title: String,
    /// Console output mode: `human` or `json`.
    pub output: String,
}

/// Resolve inputs by merging CLI flags, `INPUT_*` variables, and defaults.
pub fn resolve_inputs(
    cli_json: Option<&str>,
    cli_title: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Inputs, ReportError> {
    resolve_inputs_from(
        cli_json,
        cli_title,
        cli_output,
        env::var("INPUT_JSON").ok(),
        env::var("INPUT_TITLE").ok(),
    )
}

/// Precedence merge with explicit environment values, kept separate from
/// `resolve_inputs` so it can be exercised without touching process state.
pub fn resolve_inputs_from(
    cli_json: Option<&str>,
    cli_title: Option<&str>,
    cli_output: Option<&str>,
    env_json: Option<String>,
    env_title: Option<String>,
) -> Result<Inputs, ReportError> {
    let json = cli_json
        .map(str::to_string)
        .or(env_json)
        .filter(|s| !s.is_empty())
        .ok_or(ReportError::MissingInput("json"))?;
    let title = cli_title
        .map(str::to_string)
        .or(env_title)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let output = cli_output.unwrap_or("human").to_string();
    Ok(Inputs {
        json,
        title,
        output,
    })
}

#[derive(Debug, Clone, Default)]
/// Read-only host coordinates used for source links and output channels.
pub struct GithubContext {
    /// Server base URL, e.g. `https://github.com`.
    pub server: String,
    /// `owner/repo` coordinates.
    pub repo: String,
    /// Commit identifier the lint run saw.
    pub sha: String,
    /// Workspace root prefix to strip from input paths.
    pub workspace: String,
    /// Step-summary file path, when the host provides one.
    pub step_summary: Option<String>,
    /// Output-key file path, when the host provides one.
    pub output_file: Option<String>,
}

impl GithubContext {
    pub fn from_env() -> Self {
        GithubContext {
            server: env::var("GITHUB_SERVER_URL")
                .unwrap_or_else(|_| "https://github.com".to_string()),
            repo: env::var("GITHUB_REPOSITORY").unwrap_or_default(),
            sha: env::var("GITHUB_SHA").unwrap_or_default(),
            workspace: env::var("GITHUB_WORKSPACE").unwrap_or_default(),
            step_summary: env::var("GITHUB_STEP_SUMMARY").ok(),
            output_file: env::var("GITHUB_OUTPUT").ok(),
        }
    }
}
