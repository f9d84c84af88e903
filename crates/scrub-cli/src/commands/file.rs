use anyhow::Result;
use scrub_engine::Pipeline;
use std::path::Path;
use std::process::ExitCode;

use super::report;
use crate::cli::Cli;

/// Single-file mode: any failure is fatal
pub fn handle(pipeline: &Pipeline, path: &Path, cli: &Cli) -> Result<ExitCode> {
    let result = pipeline.process_file(path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::file_entry(&result))?);
    } else {
        report::print_file(&result, pipeline.options().dry_run);
    }

    Ok(ExitCode::SUCCESS)
}
