//! Declarative problem configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use temblor_core::{expand_template, Event, Source};
use temblor_targets::{Target, TargetGroup};

use crate::centroid::CentroidProblem;
use crate::error::ProblemError;
use crate::problem::{ParameterRange, Problem};

/// Persisted problem configuration, dispatched on the document tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProblemConfig {
    /// Centroid point-source inversion.
    #[serde(rename = "temblor.CentroidProblemConfig")]
    Centroid(CentroidProblemConfig),
}

/// Configuration of a [`CentroidProblem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CentroidProblemConfig {
    /// Template for the problem instance name; `${event_name}` is bound.
    #[serde(default = "default_name_template")]
    pub name_template: String,
    /// Admissible range per parameter name. Every parameter the problem
    /// defines must have an entry.
    pub ranges: IndexMap<String, ParameterRange>,
}

fn default_name_template() -> String {
    "centroid_${event_name}".to_string()
}

impl Default for CentroidProblemConfig {
    fn default() -> Self {
        Self {
            name_template: default_name_template(),
            ranges: IndexMap::new(),
        }
    }
}

impl ProblemConfig {
    /// Build a problem for `event` from the enumerated targets.
    ///
    /// The base source is derived from the event; the engine and any
    /// synthetic-test substitution are wired afterwards by the caller.
    pub fn get_problem(
        &self,
        event: &Event,
        target_groups: &[TargetGroup],
        targets: Vec<Target>,
    ) -> Result<Box<dyn Problem>, ProblemError> {
        match self {
            ProblemConfig::Centroid(config) => {
                let name = expand_template(&config.name_template, &[("event_name", &event.name)])
                    .map_err(|source| ProblemError::NameTemplate { source })?;
                let ranges = config.ordered_ranges()?;
                Ok(Box::new(CentroidProblem::new(
                    name,
                    Source::from_event(event),
                    target_groups.to_vec(),
                    targets,
                    ranges,
                )))
            }
        }
    }

    /// The problem name `get_problem` would assign for `event_name`.
    pub fn expand_name(&self, event_name: &str) -> Result<String, ProblemError> {
        match self {
            ProblemConfig::Centroid(config) => {
                expand_template(&config.name_template, &[("event_name", event_name)])
                    .map_err(|source| ProblemError::NameTemplate { source })
            }
        }
    }

    /// Fail-fast structural validation: the name template must expand
    /// and every parameter must have a well-formed range.
    pub fn validate(&self) -> Result<(), ProblemError> {
        match self {
            ProblemConfig::Centroid(config) => {
                expand_template(&config.name_template, &[("event_name", "event")])
                    .map_err(|source| ProblemError::NameTemplate { source })?;
                for name in config.ranges.keys() {
                    if !CentroidProblem::PARAMETER_NAMES.contains(&name.as_str()) {
                        return Err(ProblemError::UnknownParameter { name: name.clone() });
                    }
                }
                config.ordered_ranges()?;
                Ok(())
            }
        }
    }
}

impl CentroidProblemConfig {
    /// Ranges in parameter order, validated.
    fn ordered_ranges(&self) -> Result<[ParameterRange; 5], ProblemError> {
        let mut ranges = [ParameterRange::new(0.0, 0.0); 5];
        for (slot, name) in ranges.iter_mut().zip(CentroidProblem::PARAMETER_NAMES) {
            let range = self
                .ranges
                .get(name)
                .copied()
                .ok_or_else(|| ProblemError::MissingRange {
                    name: name.to_string(),
                })?;
            range.validate(name)?;
            *slot = range;
        }
        Ok(ranges)
    }
}
