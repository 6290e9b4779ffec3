//! Engine construction and lookup errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building or querying a [`LocalEngine`](crate::LocalEngine).
#[derive(Debug)]
pub enum EngineError {
    /// A configured store directory is not a store.
    NotAStore {
        /// The directory that was expected to be a store.
        path: PathBuf,
    },
    /// Two store locations declare the same store id.
    DuplicateStore {
        /// The contested id.
        id: String,
        /// Location registered first.
        first: PathBuf,
        /// Location that tried to register the same id.
        second: PathBuf,
    },
    /// No store is registered under the requested id.
    NoSuchStore {
        /// The requested id.
        id: String,
    },
    /// A store configuration file did not parse.
    StoreConfig {
        /// The configuration file.
        path: PathBuf,
        /// Parse failure.
        source: serde_yaml::Error,
    },
    /// A store configuration parsed but carries invalid values.
    InvalidStoreConfig {
        /// The configuration file.
        path: PathBuf,
        /// What is invalid about it.
        detail: String,
    },
    /// The user's ambient configuration file did not parse.
    UserConfig {
        /// The configuration file.
        path: PathBuf,
        /// Parse failure.
        source: serde_yaml::Error,
    },
    /// Filesystem access failed.
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotAStore { path } => {
                write!(f, "no Green's-function store at {}", path.display())
            }
            EngineError::DuplicateStore { id, first, second } => write!(
                f,
                "store id '{id}' registered twice: {} and {}",
                first.display(),
                second.display()
            ),
            EngineError::NoSuchStore { id } => {
                write!(f, "no Green's-function store with id '{id}'")
            }
            EngineError::StoreConfig { path, .. } => {
                write!(f, "malformed store configuration at {}", path.display())
            }
            EngineError::InvalidStoreConfig { path, detail } => {
                write!(f, "invalid store configuration at {}: {detail}", path.display())
            }
            EngineError::UserConfig { path, .. } => {
                write!(f, "malformed user configuration at {}", path.display())
            }
            EngineError::Io { path, .. } => {
                write!(f, "cannot access {}", path.display())
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::StoreConfig { source, .. } | EngineError::UserConfig { source, .. } => {
                Some(source)
            }
            EngineError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
