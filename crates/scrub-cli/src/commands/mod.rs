pub mod batch;
pub mod file;
pub mod report;

use anyhow::Result;
use scrub_config::Config;
use scrub_engine::{Pipeline, PipelineOptions};
use scrub_security::Redactor;
use scrub_sources::Exclusions;
use std::process::ExitCode;

use crate::cli::Cli;

/// Exit status when a directory run finished but some files failed
pub const PARTIAL_FAILURE: u8 = 2;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    tracing::debug!(file = %cli.file.display(), dir = ?cli.dir, verbose = cli.verbose, "parsed arguments");

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let pipeline = build_pipeline(cli, &config);

    match &cli.dir {
        Some(dir) => batch::handle(&pipeline, dir, cli),
        None => file::handle(&pipeline, &cli.file, cli),
    }
}

fn build_pipeline(cli: &Cli, config: &Config) -> Pipeline {
    let options = PipelineOptions {
        suffix: config.output.suffix.clone(),
        fallback_extension: config.output.fallback_extension.clone(),
        format: cli.format.map(Into::into).unwrap_or(config.output.format),
        output_dir: cli.output_dir.clone(),
        dry_run: cli.dry_run,
        extension: config.batch.extension.clone(),
    };

    Pipeline::new(
        Redactor::new().with_value_logging(cli.verbose),
        Exclusions::new(config.batch.exclude.clone()),
        options,
    )
}
