//! Property-list loading and saving

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use plist::Value;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{Result, ScrubError};

/// Encoding used when writing a document back to disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Binary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Binary => write!(f, "binary"),
        }
    }
}

/// Load a document from disk. XML and binary encodings are both accepted.
pub fn load_document(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| ScrubError::from_io(path, e))?;

    let metadata = file.metadata().map_err(|e| ScrubError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(ScrubError::Io {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::IsADirectory),
        });
    }

    let value = Value::from_reader(BufReader::new(file)).map_err(|source| ScrubError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded document");
    Ok(value)
}

/// Save a document to `path`.
///
/// The document is encoded into a temporary file next to the target and
/// renamed into place once fully written, so a failed save never leaves a
/// truncated file at `path`.
pub fn save_document(value: &Value, path: &Path, format: OutputFormat) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source: io::Error| ScrubError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoded = match format {
            OutputFormat::Xml => value.to_writer_xml(&mut writer),
            OutputFormat::Binary => value.to_writer_binary(&mut writer),
        };
        encoded.map_err(|e| write_err(io::Error::other(e)))?;
        writer.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), %format, "saved document");
    Ok(())
}
