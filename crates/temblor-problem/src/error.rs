//! Error types for problem construction, analysis, and optimisation.

use std::fmt;

use temblor_core::TemplateError;

// ── Problem errors ──────────────────────────────────────────────────────────

/// Errors from building a problem or mapping parameter vectors.
#[derive(Debug)]
pub enum ProblemError {
    /// A parameter vector has the wrong number of entries.
    WrongParameterCount {
        /// Entries the problem expects.
        expected: usize,
        /// Entries the caller supplied.
        got: usize,
    },
    /// The problem configuration defines no range for a parameter.
    MissingRange {
        /// The parameter without a range.
        name: String,
    },
    /// A parameter range is not usable.
    InvalidRange {
        /// The parameter the range belongs to.
        name: String,
        /// What was wrong with it.
        detail: String,
    },
    /// The configuration names a parameter the problem does not define.
    UnknownParameter {
        /// The unrecognized parameter name.
        name: String,
    },
    /// Expanding the problem name template failed.
    NameTemplate {
        /// The underlying template error.
        source: TemplateError,
    },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::WrongParameterCount { expected, got } => {
                write!(f, "parameter vector has {got} entries, expected {expected}")
            }
            ProblemError::MissingRange { name } => {
                write!(f, "no range configured for parameter '{name}'")
            }
            ProblemError::InvalidRange { name, detail } => {
                write!(f, "invalid range for parameter '{name}': {detail}")
            }
            ProblemError::UnknownParameter { name } => {
                write!(f, "problem defines no parameter '{name}'")
            }
            ProblemError::NameTemplate { source } => {
                write!(f, "problem name template: {source}")
            }
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::NameTemplate { source } => Some(source),
            _ => None,
        }
    }
}

// ── Analyser errors ─────────────────────────────────────────────────────────

/// Errors from analyser configuration and execution.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyserError {
    /// The reference distance must be finite and positive.
    InvalidReferenceDistance {
        /// The rejected value.
        got: f64,
    },
    /// The weighting exponent must be finite.
    InvalidExponent {
        /// The rejected value.
        got: f64,
    },
}

impl fmt::Display for AnalyserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyserError::InvalidReferenceDistance { got } => {
                write!(f, "reference distance must be finite and positive, got {got}")
            }
            AnalyserError::InvalidExponent { got } => {
                write!(f, "weighting exponent must be finite, got {got}")
            }
        }
    }
}

impl std::error::Error for AnalyserError {}

// ── Optimiser errors ────────────────────────────────────────────────────────

/// Errors from optimiser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimiserError {
    /// The iteration count must be at least one.
    InvalidIterations {
        /// The rejected value.
        got: u64,
    },
    /// The highscore list length must be at least one.
    InvalidHighscoreLength {
        /// The rejected value.
        got: usize,
    },
}

impl fmt::Display for OptimiserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimiserError::InvalidIterations { got } => {
                write!(f, "niterations must be at least 1, got {got}")
            }
            OptimiserError::InvalidHighscoreLength { got } => {
                write!(f, "highscore length must be at least 1, got {got}")
            }
        }
    }
}

impl std::error::Error for OptimiserError {}
