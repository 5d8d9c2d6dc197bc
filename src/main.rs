//! eslint-summary CLI binary entry point.
//! Resolves inputs, renders the report, and emits it to the host channels.

use clap::Parser;
use eslint_summary::cli::Cli;
use eslint_summary::config::{self, GithubContext, Inputs};
use eslint_summary::error::ReportError;
use eslint_summary::report::{self, Report};
use eslint_summary::{output, utils};

fn main() {
    let cli = Cli::parse();
    let inputs = match config::resolve_inputs(
        cli.json.as_deref(),
        cli.title.as_deref(),
        cli.output.as_deref(),
    ) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("{} {}", utils::error_prefix(), err);
            std::process::exit(2);
        }
    };

    let ctx = GithubContext::from_env();
    if ctx.repo.is_empty() && inputs.output != "json" {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "GITHUB_REPOSITORY is not set; source links will be incomplete."
        );
    }

    // Any failure below aborts without emitting a partial report.
    let report = match run(&inputs, &ctx) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{} {}", utils::error_prefix(), err);
            std::process::exit(1);
        }
    };
    output::print_report(&report, &inputs.output);
}

fn run(inputs: &Inputs, ctx: &GithubContext) -> Result<Report, ReportError> {
    let records = report::parse_results(&inputs.json)?;
    let rendered = report::render_report(&records, &inputs.title, ctx)?;
    output::write_step_summary(ctx, &rendered.markup)?;
    output::set_output(ctx, "report", &rendered.markup)?;
    Ok(rendered)
}
