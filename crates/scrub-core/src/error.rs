use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Cannot find '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot parse '{}' as a property list", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("Cannot write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrubError {
    /// Classify an I/O failure that happened while reading `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Short machine-friendly name, used in JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::PermissionDenied(_) => "permission_denied",
            Self::NotADirectory(_) => "not_a_directory",
            Self::Parse { .. } => "parse_error",
            Self::Write { .. } => "write_error",
            Self::Io { .. } => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
