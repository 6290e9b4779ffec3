//! Dataset loading and synthetic-test errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by dataset resolution.
#[derive(Debug)]
pub enum DatasetError {
    /// Filesystem access failed.
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A data file did not parse.
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// Parse failure.
        source: serde_yaml::Error,
    },
    /// An event catalog lists the same event name twice.
    DuplicateEvent {
        /// The repeated name.
        name: String,
        /// The catalog file.
        path: PathBuf,
    },
    /// The requested event is not in the catalog.
    NoSuchEvent {
        /// The requested name.
        name: String,
    },
    /// `get_x` was called on a synthetic test before `set_problem`.
    NoProblemBound,
    /// A synthetic-test override names a parameter the problem does not
    /// define.
    UnknownParameter {
        /// The unknown parameter name.
        name: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, .. } => write!(f, "cannot read {}", path.display()),
            DatasetError::Parse { path, .. } => write!(f, "malformed data file {}", path.display()),
            DatasetError::DuplicateEvent { name, path } => {
                write!(f, "event '{name}' listed twice in {}", path.display())
            }
            DatasetError::NoSuchEvent { name } => write!(f, "no event named '{name}'"),
            DatasetError::NoProblemBound => {
                write!(f, "synthetic test is not bound to a problem")
            }
            DatasetError::UnknownParameter { name } => {
                write!(f, "synthetic test overrides unknown parameter '{name}'")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
