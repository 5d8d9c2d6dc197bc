//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eslint-summary",
    version,
    about = "Render ESLint JSON results as a CI summary report",
    long_about = "eslint-summary — renders ESLint's JSON formatter output into an HTML report suited to a CI job's summary surface (e.g. the GitHub Actions step summary).\n\nInput precedence: CLI > INPUT_* environment variables > defaults.",
    after_help = "Examples:\n  eslint-summary --json eslint-results.json\n  eslint-summary --json \"$(npx eslint -f json src/)\" --title \"Lint results\"\n  eslint-summary --json eslint-results.json --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(
        long,
        help = "ESLint results: a JSON file path or inline JSON (required here or via INPUT_JSON)"
    )]
    pub json: Option<String>,
    #[arg(long, help = "Report heading text (default: \"ESLint Report\")")]
    pub title: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
