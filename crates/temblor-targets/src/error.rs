//! Target group validation errors.

use std::fmt;

/// Errors from validating a target group configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetError {
    /// The group lists no waveform channels or GNSS components.
    NoChannels,
    /// A distance bound is negative.
    NegativeDistance {
        /// The offending value in metres.
        got: f64,
    },
    /// The distance window excludes everything.
    EmptyDistanceRange {
        /// Lower bound in metres.
        distance_min: f64,
        /// Upper bound in metres.
        distance_max: f64,
    },
    /// The group weight is not a positive finite number.
    InvalidWeight {
        /// The offending value.
        got: f64,
    },
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::NoChannels => {
                write!(f, "target group selects no channels or components")
            }
            TargetError::NegativeDistance { got } => {
                write!(f, "distance bound must be non-negative, got {got}")
            }
            TargetError::EmptyDistanceRange {
                distance_min,
                distance_max,
            } => write!(
                f,
                "empty distance window: distance_min {distance_min} exceeds distance_max {distance_max}"
            ),
            TargetError::InvalidWeight { got } => {
                write!(f, "group weight must be positive and finite, got {got}")
            }
        }
    }
}

impl std::error::Error for TargetError {}
