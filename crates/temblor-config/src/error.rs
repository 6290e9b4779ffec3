//! The aggregate configuration error.

use std::fmt;
use std::io;
use std::path::PathBuf;

use temblor_core::TemplateError;
use temblor_dataset::DatasetError;
use temblor_gf::EngineError;
use temblor_problem::{AnalyserError, OptimiserError, ProblemError};
use temblor_targets::TargetError;

/// Errors raised while loading, validating, or assembling from a
/// configuration.
///
/// Failures of the collaborating subsystems are wrapped unchanged and
/// exposed through [`source`](std::error::Error::source).
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem access to a configuration file failed.
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A configuration document did not parse or deserialize.
    Parse {
        /// The file being read.
        path: PathBuf,
        /// Parse failure.
        source: serde_yaml::Error,
    },
    /// The document's top level is not a tagged configuration object.
    NotAConfig {
        /// The file being read.
        path: PathBuf,
        /// What the top level was instead.
        detail: String,
    },
    /// Serializing a configuration failed.
    Serialize {
        /// Underlying error.
        source: serde_yaml::Error,
    },
    /// The run-directory template did not expand.
    RundirTemplate {
        /// The underlying template error.
        source: TemplateError,
    },
    /// A structural rule not covered by a subsystem error is violated.
    Invalid {
        /// What is wrong.
        detail: String,
    },
    /// Engine construction or lookup failed.
    Engine(EngineError),
    /// Dataset resolution failed.
    Dataset(DatasetError),
    /// A target group is misconfigured.
    Target(TargetError),
    /// Problem construction failed.
    Problem(ProblemError),
    /// An analyser is misconfigured.
    Analyser(AnalyserError),
    /// The optimiser is misconfigured.
    Optimiser(OptimiserError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, .. } => {
                write!(f, "cannot access {}", path.display())
            }
            ConfigError::Parse { path, .. } => {
                write!(f, "malformed configuration at {}", path.display())
            }
            ConfigError::NotAConfig { path, detail } => {
                write!(f, "{} is not a configuration file: {detail}", path.display())
            }
            ConfigError::Serialize { .. } => {
                write!(f, "cannot serialize configuration")
            }
            ConfigError::RundirTemplate { source } => {
                write!(f, "rundir template: {source}")
            }
            ConfigError::Invalid { detail } => {
                write!(f, "invalid configuration: {detail}")
            }
            ConfigError::Engine(source) => source.fmt(f),
            ConfigError::Dataset(source) => source.fmt(f),
            ConfigError::Target(source) => source.fmt(f),
            ConfigError::Problem(source) => source.fmt(f),
            ConfigError::Analyser(source) => source.fmt(f),
            ConfigError::Optimiser(source) => source.fmt(f),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } | ConfigError::Serialize { source } => Some(source),
            ConfigError::RundirTemplate { source } => Some(source),
            ConfigError::Engine(source) => Some(source),
            ConfigError::Dataset(source) => Some(source),
            ConfigError::Target(source) => Some(source),
            ConfigError::Problem(source) => Some(source),
            ConfigError::Analyser(source) => Some(source),
            ConfigError::Optimiser(source) => Some(source),
            ConfigError::NotAConfig { .. } | ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<EngineError> for ConfigError {
    fn from(source: EngineError) -> Self {
        ConfigError::Engine(source)
    }
}

impl From<DatasetError> for ConfigError {
    fn from(source: DatasetError) -> Self {
        ConfigError::Dataset(source)
    }
}

impl From<TargetError> for ConfigError {
    fn from(source: TargetError) -> Self {
        ConfigError::Target(source)
    }
}

impl From<ProblemError> for ConfigError {
    fn from(source: ProblemError) -> Self {
        ConfigError::Problem(source)
    }
}

impl From<AnalyserError> for ConfigError {
    fn from(source: AnalyserError) -> Self {
        ConfigError::Analyser(source)
    }
}

impl From<OptimiserError> for ConfigError {
    fn from(source: OptimiserError) -> Self {
        ConfigError::Optimiser(source)
    }
}
