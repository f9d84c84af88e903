use scrub_core::{Result, ScrubError};
use std::fs;
use std::path::{Path, PathBuf};

use crate::exclude::Exclusions;

/// List the files directly under `dir` whose extension matches `extension`.
///
/// Only regular files are returned; symlinks are followed, so a link to a
/// file counts and a link to a directory does not. The result is sorted.
pub fn scan_directory(dir: &Path, extension: &str, exclusions: &Exclusions) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(dir).map_err(|e| ScrubError::from_io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScrubError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScrubError::from_io(dir, e))? {
        let entry = entry.map_err(|e| ScrubError::from_io(dir, e))?;
        let path = entry.path();

        if !has_extension(&path, extension) {
            continue;
        }

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        }

        if let Some(pattern) = exclusions.matching_pattern(&path) {
            tracing::debug!(path = %path.display(), %pattern, "excluded");
            continue;
        }

        files.push(path);
    }

    // Sort for determinism
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "scanned directory");
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
