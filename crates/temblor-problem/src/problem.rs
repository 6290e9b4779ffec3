//! The problem abstraction and parameter ranges.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use temblor_core::{Parameterized, Source};
use temblor_gf::LocalEngine;
use temblor_targets::Target;

use crate::error::ProblemError;

/// Closed interval of admissible values for one model parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterRange {
    /// Lower bound, inclusive.
    pub start: f64,
    /// Upper bound, inclusive.
    pub stop: f64,
}

impl ParameterRange {
    /// A range from `start` to `stop`, inclusive on both ends.
    pub fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    /// Check the range is finite and ordered; `name` labels the error.
    pub fn validate(&self, name: &str) -> Result<(), ProblemError> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(ProblemError::InvalidRange {
                name: name.to_string(),
                detail: format!("bounds must be finite, got {}..{}", self.start, self.stop),
            });
        }
        if self.start > self.stop {
            return Err(ProblemError::InvalidRange {
                name: name.to_string(),
                detail: format!("start {} exceeds stop {}", self.start, self.stop),
            });
        }
        Ok(())
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.stop
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.stop - self.start
    }
}

/// A fully assembled inversion problem.
///
/// A problem owns its base source, its flattened target list, and the
/// per-parameter bounds, and maps parameter vectors to concrete source
/// models. The engine is bound after construction by
/// `setup_modelling_environment`.
pub trait Problem: Parameterized + Send + std::fmt::Debug {
    /// Instance name, unique per event.
    fn name(&self) -> &str;

    /// The reference source candidate models are measured against.
    fn base_source(&self) -> &Source;

    /// Replace the reference source, used by synthetic tests.
    fn set_base_source(&mut self, source: Source);

    /// Bind the forward-modelling engine.
    fn set_engine(&mut self, engine: Arc<LocalEngine>);

    /// The bound engine, if any.
    fn engine(&self) -> Option<&Arc<LocalEngine>>;

    /// Observation targets, flattened across groups.
    fn targets(&self) -> &[Target];

    /// Mutable access to the targets, used by analysers.
    fn targets_mut(&mut self) -> &mut [Target];

    /// Admissible ranges, in [`parameter_names`](Parameterized::parameter_names)
    /// order.
    fn parameter_bounds(&self) -> &[ParameterRange];

    /// Map a parameter vector to a concrete source model.
    fn get_source(&self, x: &[f64]) -> Result<Source, ProblemError>;

    /// Inverse of [`get_source`](Self::get_source): recover the parameter
    /// vector a source corresponds to.
    fn pack(&self, source: &Source) -> Vec<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_endpoints() {
        let range = ParameterRange::new(-2.0, 3.0);
        assert!(range.contains(-2.0));
        assert!(range.contains(3.0));
        assert!(range.contains(0.0));
        assert!(!range.contains(3.1));
    }

    #[test]
    fn range_span() {
        assert_eq!(ParameterRange::new(-2.0, 3.0).span(), 5.0);
        assert_eq!(ParameterRange::new(1.0, 1.0).span(), 0.0);
    }

    #[test]
    fn validate_accepts_degenerate_range() {
        assert!(ParameterRange::new(4.0, 4.0).validate("depth").is_ok());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let err = ParameterRange::new(2.0, 1.0).validate("depth").unwrap_err();
        match err {
            ProblemError::InvalidRange { name, .. } => assert_eq!(name, "depth"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_non_finite_bounds() {
        let err = ParameterRange::new(0.0, f64::INFINITY)
            .validate("magnitude")
            .unwrap_err();
        match err {
            ProblemError::InvalidRange { name, .. } => assert_eq!(name, "magnitude"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn range_round_trips_through_yaml() {
        let range = ParameterRange::new(-10.0, 10.0);
        let yaml = serde_yaml::to_string(&range).unwrap();
        let back: ParameterRange = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, range);
    }
}
