//! Load → redact → save pipeline, for single files and whole directories

pub mod naming;

use scrub_core::{OutputFormat, Result, ScrubError, load_document, save_document};
use scrub_security::{RedactionInfo, Redactor};
use scrub_sources::{Exclusions, scan_directory};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

pub use naming::output_path;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub suffix: String,
    pub fallback_extension: String,
    pub format: OutputFormat,
    /// Write outputs here instead of next to each input
    pub output_dir: Option<PathBuf>,
    /// Redact in memory only, write nothing
    pub dry_run: bool,
    /// Extension matched in directory mode
    pub extension: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            suffix: "_modified".to_string(),
            fallback_extension: "plist".to_string(),
            format: OutputFormat::Xml,
            output_dir: None,
            dry_run: false,
            extension: "plist".to_string(),
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// `None` in dry-run mode
    pub output: Option<PathBuf>,
    pub redactions: Vec<RedactionInfo>,
}

#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<FileReport>,
}

/// Per-file outcomes of a directory run, in path order
#[derive(Debug)]
pub struct BatchReport {
    pub dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Path, &ScrubError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

pub struct Pipeline {
    redactor: Redactor,
    exclusions: Exclusions,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(redactor: Redactor, exclusions: Exclusions, options: PipelineOptions) -> Self {
        Self {
            redactor,
            exclusions,
            options,
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Redact a single file and write the result next to it
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        // 1. Load
        let mut document = load_document(path)?;

        // 2. Redact
        let redactions = self.redactor.redact(&mut document);
        tracing::info!(
            path = %path.display(),
            count = redactions.len(),
            "redacted document"
        );

        if self.options.dry_run {
            return Ok(FileReport {
                input: path.to_path_buf(),
                output: None,
                redactions,
            });
        }

        // 3. Save
        let output = output_path(
            path,
            &self.options.suffix,
            &self.options.fallback_extension,
            self.options.output_dir.as_deref(),
        );
        if same_file(path, &output) {
            return Err(ScrubError::Write {
                path: output,
                source: io::Error::new(io::ErrorKind::AlreadyExists, "output would replace the input"),
            });
        }
        if let Some(dir) = &self.options.output_dir {
            std::fs::create_dir_all(dir).map_err(|source| ScrubError::Write {
                path: dir.clone(),
                source,
            })?;
        }
        save_document(&document, &output, self.options.format)?;
        tracing::info!(output = %output.display(), "wrote document");

        Ok(FileReport {
            input: path.to_path_buf(),
            output: Some(output),
            redactions,
        })
    }

    /// Process every matching file directly under `dir`.
    ///
    /// Fails only when the directory itself cannot be listed. Per-file
    /// failures are collected in the report.
    pub fn process_directory(&self, dir: &Path) -> Result<BatchReport> {
        let files = scan_directory(dir, &self.options.extension, &self.exclusions)?;

        let mut outcomes = Vec::with_capacity(files.len());
        for input in files {
            let result = self.process_file(&input);
            if let Err(e) = &result {
                tracing::warn!(path = %input.display(), error = %e, "failed to process file");
            }
            outcomes.push(FileOutcome { input, result });
        }

        Ok(BatchReport {
            dir: dir.to_path_buf(),
            outcomes,
        })
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
