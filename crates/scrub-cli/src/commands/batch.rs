use anyhow::Result;
use scrub_engine::Pipeline;
use std::path::Path;
use std::process::ExitCode;

use super::{PARTIAL_FAILURE, report};
use crate::cli::Cli;

/// Directory mode: per-file failures are reported, only listing the
/// directory is fatal
pub fn handle(pipeline: &Pipeline, dir: &Path, cli: &Cli) -> Result<ExitCode> {
    let result = pipeline.process_directory(dir)?;

    if cli.json {
        let entry = report::batch_entry(&result, cli.verbose);
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        if result.outcomes.is_empty() {
            println!(
                "No .{} files found in {}",
                pipeline.options().extension,
                dir.display()
            );
        }

        for outcome in &result.outcomes {
            match &outcome.result {
                Ok(file) => report::print_file(file, pipeline.options().dry_run),
                Err(err) => {
                    eprintln!("✗ {}: {}", outcome.input.display(), err);
                    if cli.verbose
                        && let Some(detail) = report::causes(err)
                    {
                        eprintln!("  caused by: {}", detail);
                    }
                }
            }
        }

        let failed = result.failed().count();
        println!(
            "\nProcessed {} file(s): {} succeeded, {} failed",
            result.outcomes.len(),
            result.outcomes.len() - failed,
            failed
        );
    }

    if result.has_failures() {
        Ok(ExitCode::from(PARTIAL_FAILURE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
