//! Problem analysers.
//!
//! Analysers run after problem assembly and before optimisation, and
//! adjust the problem in place. The only built-in analyser balances
//! target weights against geometrical spreading: without it, near
//! stations with large amplitudes dominate the misfit.

use serde::{Deserialize, Serialize};

use crate::error::AnalyserError;
use crate::problem::Problem;

/// Post-assembly problem analysis.
pub trait Analyser: Send {
    /// Inspect and adjust `problem` in place.
    fn analyse(&self, problem: &mut dyn Problem) -> Result<(), AnalyserError>;
}

/// Sets each target's balancing weight from its event distance.
///
/// The weight is `(distance / reference_distance) ^ exponent`, with the
/// distance floored at one metre. With the defaults, a target at the
/// reference distance keeps weight 1 and a target at half that distance
/// is down-weighted to 0.5.
#[derive(Debug, Clone, Copy)]
pub struct TargetBalancingAnalyser {
    reference_distance: f64,
    exponent: f64,
}

impl TargetBalancingAnalyser {
    /// Build the analyser, validating the configuration values.
    pub fn new(reference_distance: f64, exponent: f64) -> Result<Self, AnalyserError> {
        if !reference_distance.is_finite() || reference_distance <= 0.0 {
            return Err(AnalyserError::InvalidReferenceDistance {
                got: reference_distance,
            });
        }
        if !exponent.is_finite() {
            return Err(AnalyserError::InvalidExponent { got: exponent });
        }
        Ok(Self {
            reference_distance,
            exponent,
        })
    }
}

impl Analyser for TargetBalancingAnalyser {
    fn analyse(&self, problem: &mut dyn Problem) -> Result<(), AnalyserError> {
        for target in problem.targets_mut() {
            let distance = target.distance_m.max(1.0);
            target.balancing_weight = Some((distance / self.reference_distance).powf(self.exponent));
        }
        Ok(())
    }
}

// ── Configuration ───────────────────────────────────────────────────────────

/// Persisted analyser configuration, dispatched on the document tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalyserConfig {
    /// Distance-based target weight balancing.
    #[serde(rename = "temblor.TargetBalancingAnalyserConfig")]
    TargetBalancing(TargetBalancingAnalyserConfig),
}

/// Configuration of a [`TargetBalancingAnalyser`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetBalancingAnalyserConfig {
    /// Distance in metres at which the balancing weight is exactly 1.
    #[serde(default = "default_reference_distance")]
    pub reference_distance: f64,
    /// Exponent of the distance ratio.
    #[serde(default = "default_exponent")]
    pub exponent: f64,
}

fn default_reference_distance() -> f64 {
    1.0e5
}

fn default_exponent() -> f64 {
    1.0
}

impl Default for TargetBalancingAnalyserConfig {
    fn default() -> Self {
        Self {
            reference_distance: default_reference_distance(),
            exponent: default_exponent(),
        }
    }
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        AnalyserConfig::TargetBalancing(TargetBalancingAnalyserConfig::default())
    }
}

impl AnalyserConfig {
    /// Build the configured analyser.
    pub fn get_analyser(&self) -> Result<Box<dyn Analyser>, AnalyserError> {
        match self {
            AnalyserConfig::TargetBalancing(config) => Ok(Box::new(
                TargetBalancingAnalyser::new(config.reference_distance, config.exponent)?,
            )),
        }
    }

    /// Fail-fast validation of the configuration values.
    pub fn validate(&self) -> Result<(), AnalyserError> {
        self.get_analyser().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use temblor_core::{Source, StationCodes};
    use temblor_gf::LocalEngine;
    use temblor_targets::{Quantity, Target};
    use temblor_test_utils::test_event;

    use crate::centroid::CentroidProblem;
    use crate::problem::ParameterRange;

    fn target_at(distance_m: f64) -> Target {
        Target {
            path: "target.0.XX.S000..Z".to_string(),
            codes: StationCodes::new("XX", "S000", ""),
            channel: "Z".to_string(),
            quantity: Quantity::Displacement,
            distance_m,
            store_id: None,
            manual_weight: 1.0,
            balancing_weight: None,
        }
    }

    fn problem_with_targets(targets: Vec<Target>) -> CentroidProblem {
        let event = test_event("ev001");
        CentroidProblem::new(
            "centroid_ev001",
            Source::from_event(&event),
            Vec::new(),
            targets,
            [ParameterRange::new(-1.0, 1.0); 5],
        )
    }

    #[test]
    fn balancing_scales_with_distance_ratio() {
        let mut problem = problem_with_targets(vec![
            target_at(50_000.0),
            target_at(100_000.0),
            target_at(200_000.0),
        ]);
        let analyser = TargetBalancingAnalyser::new(1.0e5, 1.0).unwrap();
        analyser.analyse(&mut problem).unwrap();

        let weights: Vec<f64> = problem
            .targets()
            .iter()
            .map(|t| t.balancing_weight.unwrap())
            .collect();
        assert!((weights[0] - 0.5).abs() < 1e-12);
        assert!((weights[1] - 1.0).abs() < 1e-12);
        assert!((weights[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance_is_floored() {
        let mut problem = problem_with_targets(vec![target_at(0.0)]);
        let analyser = TargetBalancingAnalyser::new(1.0e5, 1.0).unwrap();
        analyser.analyse(&mut problem).unwrap();
        let w = problem.targets()[0].balancing_weight.unwrap();
        assert!((w - 1.0e-5).abs() < 1e-18);
    }

    #[test]
    fn exponent_shapes_the_weight() {
        let mut problem = problem_with_targets(vec![target_at(200_000.0)]);
        let analyser = TargetBalancingAnalyser::new(1.0e5, 2.0).unwrap();
        analyser.analyse(&mut problem).unwrap();
        let w = problem.targets()[0].balancing_weight.unwrap();
        assert!((w - 4.0).abs() < 1e-12);
    }

    #[test]
    fn analyse_works_through_a_trait_object() {
        let config = AnalyserConfig::default();
        let analyser = config.get_analyser().unwrap();
        let mut problem = problem_with_targets(vec![target_at(100_000.0)]);
        let engine = Arc::new(LocalEngine::new(false, &[], &[]).unwrap());
        problem.set_engine(engine);
        analyser.analyse(&mut problem).unwrap();
        assert!(problem.targets()[0].balancing_weight.is_some());
    }

    #[test]
    fn rejects_non_positive_reference_distance() {
        let err = TargetBalancingAnalyser::new(0.0, 1.0).unwrap_err();
        match err {
            AnalyserError::InvalidReferenceDistance { got } => assert_eq!(got, 0.0),
            other => panic!("expected InvalidReferenceDistance, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_exponent() {
        let err = TargetBalancingAnalyser::new(1.0e5, f64::NAN).unwrap_err();
        match err {
            AnalyserError::InvalidExponent { .. } => {}
            other => panic!("expected InvalidExponent, got {other:?}"),
        }
    }

    #[test]
    fn config_defaults_round_trip() {
        let config = AnalyserConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.starts_with("!temblor.TargetBalancingAnalyserConfig"));
        let back: AnalyserConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_fields_are_optional_in_yaml() {
        let yaml = "!temblor.TargetBalancingAnalyserConfig\nexponent: 2.0\n";
        let AnalyserConfig::TargetBalancing(config) = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.reference_distance, 1.0e5);
        assert_eq!(config.exponent, 2.0);
    }
}
