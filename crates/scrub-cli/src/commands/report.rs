//! Human and JSON renderings of pipeline results

use scrub_core::ScrubError;
use scrub_engine::{BatchReport, FileReport};
use scrub_security::RedactionInfo;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct FileEntry<'a> {
    pub input: &'a Path,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a Path>,
    pub redactions: &'a [RedactionInfo],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEntry>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub kind: &'static str,
    pub message: String,
    /// Underlying cause, only filled in verbose mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchEntry<'a> {
    pub dir: &'a Path,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileEntry<'a>>,
}

impl ErrorEntry {
    pub fn new(err: &ScrubError, verbose: bool) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            detail: if verbose { causes(err) } else { None },
        }
    }
}

pub fn file_entry(report: &FileReport) -> FileEntry<'_> {
    FileEntry {
        input: &report.input,
        status: "ok",
        output: report.output.as_deref(),
        redactions: &report.redactions,
        error: None,
    }
}

pub fn batch_entry(report: &BatchReport, verbose: bool) -> BatchEntry<'_> {
    let files: Vec<FileEntry<'_>> = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(file) => file_entry(file),
            Err(err) => FileEntry {
                input: &outcome.input,
                status: "error",
                output: None,
                redactions: &[],
                error: Some(ErrorEntry::new(err, verbose)),
            },
        })
        .collect();

    BatchEntry {
        dir: &report.dir,
        succeeded: report.succeeded().count(),
        failed: report.failed().count(),
        files,
    }
}

/// Source chain of an error joined into one line
pub fn causes(err: &dyn std::error::Error) -> Option<String> {
    let mut parts = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(": "))
    }
}

pub fn print_file(report: &FileReport, dry_run: bool) {
    let input = report.input.display();
    if report.redactions.is_empty() {
        println!("No sensitive keys found in {}", input);
    } else {
        let keys: Vec<&str> = report.redactions.iter().map(|r| r.key.as_str()).collect();
        let verb = if dry_run { "Would redact" } else { "✓ Redacted" };
        println!("{} {} key(s) in {}: {}", verb, keys.len(), input, keys.join(", "));
    }

    if let Some(output) = &report.output {
        println!("  Output: {}", output.display());
    }
}
