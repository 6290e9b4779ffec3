//! Centroid point-source problem.

use std::sync::Arc;

use temblor_core::{Parameterized, Source};
use temblor_gf::LocalEngine;
use temblor_targets::{Target, TargetGroup};

use crate::error::ProblemError;
use crate::problem::{ParameterRange, Problem};

/// Inversion for the centroid of a point source.
///
/// Five parameters: an origin-time shift in seconds relative to the base
/// source time, north/east offsets and depth in metres, and the moment
/// magnitude. The anchor coordinates (`lat`, `lon`) are taken from the
/// base source and never inverted for.
#[derive(Debug)]
pub struct CentroidProblem {
    name: String,
    base_source: Source,
    target_groups: Vec<TargetGroup>,
    targets: Vec<Target>,
    ranges: [ParameterRange; 5],
    engine: Option<Arc<LocalEngine>>,
}

impl CentroidProblem {
    /// Parameter names, in vector order.
    pub const PARAMETER_NAMES: [&'static str; 5] =
        ["time", "north_shift", "east_shift", "depth", "magnitude"];

    /// Assemble a problem from its parts.
    ///
    /// `ranges` are the admissible intervals, in
    /// [`PARAMETER_NAMES`](Self::PARAMETER_NAMES) order; `time` is a shift
    /// relative to the base source time, so its range is centered near zero.
    pub fn new(
        name: impl Into<String>,
        base_source: Source,
        target_groups: Vec<TargetGroup>,
        targets: Vec<Target>,
        ranges: [ParameterRange; 5],
    ) -> Self {
        Self {
            name: name.into(),
            base_source,
            target_groups,
            targets,
            ranges,
            engine: None,
        }
    }

    /// The target groups the targets were enumerated from.
    pub fn target_groups(&self) -> &[TargetGroup] {
        &self.target_groups
    }
}

impl Parameterized for CentroidProblem {
    fn parameter_names(&self) -> Vec<String> {
        Self::PARAMETER_NAMES.iter().map(|s| s.to_string()).collect()
    }

    fn base_x(&self) -> Vec<f64> {
        self.pack(&self.base_source)
    }
}

impl Problem for CentroidProblem {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_source(&self) -> &Source {
        &self.base_source
    }

    fn set_base_source(&mut self, source: Source) {
        self.base_source = source;
    }

    fn set_engine(&mut self, engine: Arc<LocalEngine>) {
        self.engine = Some(engine);
    }

    fn engine(&self) -> Option<&Arc<LocalEngine>> {
        self.engine.as_ref()
    }

    fn targets(&self) -> &[Target] {
        &self.targets
    }

    fn targets_mut(&mut self) -> &mut [Target] {
        &mut self.targets
    }

    fn parameter_bounds(&self) -> &[ParameterRange] {
        &self.ranges
    }

    fn get_source(&self, x: &[f64]) -> Result<Source, ProblemError> {
        if x.len() != Self::PARAMETER_NAMES.len() {
            return Err(ProblemError::WrongParameterCount {
                expected: Self::PARAMETER_NAMES.len(),
                got: x.len(),
            });
        }
        Ok(Source {
            name: self.base_source.name.clone(),
            time: self.base_source.time + x[0],
            lat: self.base_source.lat,
            lon: self.base_source.lon,
            north_shift: x[1],
            east_shift: x[2],
            depth: x[3],
            magnitude: x[4],
        })
    }

    fn pack(&self, source: &Source) -> Vec<f64> {
        vec![
            source.time - self.base_source.time,
            source.north_shift,
            source.east_shift,
            source.depth,
            source.magnitude,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temblor_test_utils::test_event;

    fn ranges() -> [ParameterRange; 5] {
        [
            ParameterRange::new(-10.0, 10.0),
            ParameterRange::new(-20_000.0, 20_000.0),
            ParameterRange::new(-20_000.0, 20_000.0),
            ParameterRange::new(1_000.0, 30_000.0),
            ParameterRange::new(5.0, 7.0),
        ]
    }

    fn problem() -> CentroidProblem {
        let event = test_event("ev001");
        CentroidProblem::new(
            "centroid_ev001",
            Source::from_event(&event),
            Vec::new(),
            Vec::new(),
            ranges(),
        )
    }

    #[test]
    fn parameter_names_in_vector_order() {
        assert_eq!(
            problem().parameter_names(),
            vec!["time", "north_shift", "east_shift", "depth", "magnitude"]
        );
    }

    #[test]
    fn base_x_packs_the_base_source() {
        let p = problem();
        let x = p.base_x();
        assert_eq!(x, vec![0.0, 0.0, 0.0, 9_000.0, 6.0]);
    }

    #[test]
    fn get_source_applies_time_shift_and_offsets() {
        let p = problem();
        let source = p
            .get_source(&[2.5, 1_000.0, -500.0, 12_000.0, 6.3])
            .unwrap();
        assert_eq!(source.time, p.base_source().time + 2.5);
        assert_eq!(source.north_shift, 1_000.0);
        assert_eq!(source.east_shift, -500.0);
        assert_eq!(source.depth, 12_000.0);
        assert_eq!(source.magnitude, 6.3);
        assert_eq!(source.lat, p.base_source().lat);
        assert_eq!(source.lon, p.base_source().lon);
    }

    #[test]
    fn pack_inverts_get_source() {
        let p = problem();
        let x = vec![-3.0, 4_000.0, 2_000.0, 15_000.0, 5.5];
        let source = p.get_source(&x).unwrap();
        assert_eq!(p.pack(&source), x);
    }

    #[test]
    fn get_source_rejects_wrong_length() {
        let err = problem().get_source(&[1.0, 2.0]).unwrap_err();
        match err {
            ProblemError::WrongParameterCount { expected, got } => {
                assert_eq!(expected, 5);
                assert_eq!(got, 2);
            }
            other => panic!("expected WrongParameterCount, got {other:?}"),
        }
    }

    #[test]
    fn replacing_base_source_moves_the_time_reference() {
        let mut p = problem();
        let shifted = p.get_source(&[5.0, 0.0, 0.0, 9_000.0, 6.0]).unwrap();
        p.set_base_source(shifted.clone());
        assert_eq!(p.pack(&shifted)[0], 0.0);
        assert_eq!(p.base_x()[0], 0.0);
    }

    #[test]
    fn engine_binding_is_observable() {
        let mut p = problem();
        assert!(p.engine().is_none());
        let engine = Arc::new(LocalEngine::new(false, &[], &[]).unwrap());
        p.set_engine(Arc::clone(&engine));
        assert!(Arc::ptr_eq(p.engine().unwrap(), &engine));
    }
}
