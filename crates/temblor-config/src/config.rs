//! The root configuration aggregate.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use temblor_core::paths::{HasPaths, PathFrame};
use temblor_core::{expand_template, Event};
use temblor_dataset::{Dataset, DatasetConfig};
use temblor_problem::{Analyser, AnalyserConfig, Optimiser, OptimiserConfig, Problem, ProblemConfig};
use temblor_targets::{Target, TargetGroup};

use crate::engine_config::EngineConfig;
use crate::error::ConfigError;

/// A complete project configuration.
///
/// Owns every nested configuration object; the base directory set by
/// [`read_config`](crate::read_config) propagates from here to all
/// path-bearing descendants. Deliberately not `Clone`: the engine cache
/// in [`EngineConfig`] belongs to exactly one configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Template for the run directory of a problem; `${event_name}` and
    /// `${problem_name}` are bound.
    pub rundir_template: String,
    /// Where the observational data lives.
    pub dataset_config: DatasetConfig,
    /// Target groups, enumerated in declaration order. A group's
    /// position is part of its targets' names, whether enabled or not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_groups: Vec<TargetGroup>,
    /// What to invert for.
    pub problem_config: ProblemConfig,
    /// Analysers run between assembly and optimisation.
    #[serde(default = "default_analyser_configs")]
    pub analyser_configs: Vec<AnalyserConfig>,
    /// How to sample the parameter space.
    #[serde(default)]
    pub optimiser_config: OptimiserConfig,
    /// Where Green's-function stores live.
    #[serde(default)]
    pub engine_config: EngineConfig,
    /// Prefix inserted between the base directory and this node's
    /// relative paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<PathBuf>,
    #[serde(skip)]
    frame: PathFrame,
}

fn default_analyser_configs() -> Vec<AnalyserConfig> {
    vec![AnalyserConfig::default()]
}

impl Config {
    /// A configuration with the given required parts and everything else
    /// at its default.
    pub fn new(
        rundir_template: impl Into<String>,
        dataset_config: DatasetConfig,
        problem_config: ProblemConfig,
    ) -> Self {
        Self {
            rundir_template: rundir_template.into(),
            dataset_config,
            target_groups: Vec::new(),
            problem_config,
            analyser_configs: default_analyser_configs(),
            optimiser_config: OptimiserConfig::default(),
            engine_config: EngineConfig::default(),
            path_prefix: None,
            frame: PathFrame::default(),
        }
    }

    /// Names of all cataloged events, in file order.
    pub fn get_event_names(&self) -> Result<Vec<String>, ConfigError> {
        Ok(self.dataset_config.get_event_names()?)
    }

    /// Number of cataloged events. Recomputed from the dataset on each
    /// call.
    pub fn nevents(&self) -> Result<usize, ConfigError> {
        Ok(self.get_event_names()?.len())
    }

    /// The data snapshot for one event.
    pub fn get_dataset(&self, event_name: &str) -> Result<Dataset, ConfigError> {
        Ok(self.dataset_config.get_dataset(event_name)?)
    }

    /// Enumerate the targets of all enabled groups against `event`.
    ///
    /// Groups keep their declaration-order index in the target names
    /// even when earlier groups are disabled, so names stay stable
    /// across edits that merely toggle `enabled`.
    pub fn get_targets(&self, event: &Event) -> Result<Vec<Target>, ConfigError> {
        let dataset = self.get_dataset(&event.name)?;
        let mut targets = Vec::new();
        for (igroup, group) in self.target_groups.iter().enumerate() {
            if !group.enabled() {
                continue;
            }
            targets.extend(group.get_targets(&dataset, event, &format!("target.{igroup}")));
        }
        Ok(targets)
    }

    /// Wire a problem to the engine and, if configured, to the
    /// synthetic test.
    ///
    /// The engine is bound first; a synthetic test then replaces the
    /// problem's base source with the source of its parameter vector.
    pub fn setup_modelling_environment(
        &self,
        problem: &mut dyn Problem,
    ) -> Result<(), ConfigError> {
        let engine = Arc::clone(self.engine_config.get_engine()?);
        problem.set_engine(engine);

        let event_name = problem.base_source().name.clone();
        let mut dataset = self.get_dataset(&event_name)?;
        if let Some(synthetic) = dataset.synthetic_test_mut() {
            synthetic.set_problem(&*problem);
            let x = synthetic.get_x()?;
            let source = problem.get_source(&x)?;
            problem.set_base_source(source);
        }
        Ok(())
    }

    /// Build the fully wired problem for `event`.
    ///
    /// The single entry point from an event to a runnable problem:
    /// targets are enumerated, the problem is constructed, and the
    /// modelling environment is set up on it.
    pub fn get_problem(&self, event: &Event) -> Result<Box<dyn Problem>, ConfigError> {
        let targets = self.get_targets(event)?;
        let mut problem = self
            .problem_config
            .get_problem(event, &self.target_groups, targets)?;
        self.setup_modelling_environment(problem.as_mut())?;
        Ok(problem)
    }

    /// Build the configured analysers, in declaration order.
    pub fn get_analysers(&self) -> Result<Vec<Box<dyn Analyser>>, ConfigError> {
        self.analyser_configs
            .iter()
            .map(|config| Ok(config.get_analyser()?))
            .collect()
    }

    /// Build the configured optimiser.
    pub fn get_optimiser(&self) -> Result<Box<dyn Optimiser>, ConfigError> {
        Ok(self.optimiser_config.get_optimiser()?)
    }

    /// The run directory for a problem, resolved against the base
    /// directory.
    pub fn expand_rundir(
        &self,
        event_name: &str,
        problem_name: &str,
    ) -> Result<PathBuf, ConfigError> {
        let expanded = expand_template(
            &self.rundir_template,
            &[("event_name", event_name), ("problem_name", problem_name)],
        )
        .map_err(|source| ConfigError::RundirTemplate { source })?;
        Ok(self.expand_path(Path::new(&expanded)))
    }

    /// Fail-fast structural validation of the whole aggregate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rundir_template.trim().is_empty() {
            return Err(ConfigError::Invalid {
                detail: "rundir_template must not be empty".to_string(),
            });
        }
        expand_template(
            &self.rundir_template,
            &[("event_name", "event"), ("problem_name", "problem")],
        )
        .map_err(|source| ConfigError::RundirTemplate { source })?;

        for group in &self.target_groups {
            group.validate()?;
        }
        self.problem_config.validate()?;
        for analyser in &self.analyser_configs {
            analyser.validate()?;
        }
        self.optimiser_config.validate()?;
        Ok(())
    }
}

impl HasPaths for Config {
    fn path_frame(&self) -> &PathFrame {
        &self.frame
    }
    fn path_frame_mut(&mut self) -> &mut PathFrame {
        &mut self.frame
    }
    fn path_prefix(&self) -> Option<&Path> {
        self.path_prefix.as_deref()
    }
    fn set_path_prefix(&mut self, prefix: Option<PathBuf>) {
        self.path_prefix = prefix;
    }
    fn nested_path_nodes(&mut self) -> Vec<&mut dyn HasPaths> {
        vec![&mut self.dataset_config, &mut self.engine_config]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temblor_problem::{CentroidProblemConfig, ParameterRange};
    use temblor_targets::WaveformTargetGroup;

    fn problem_config() -> ProblemConfig {
        let mut inner = CentroidProblemConfig::default();
        for (name, range) in [
            ("time", ParameterRange::new(-10.0, 10.0)),
            ("north_shift", ParameterRange::new(-20_000.0, 20_000.0)),
            ("east_shift", ParameterRange::new(-20_000.0, 20_000.0)),
            ("depth", ParameterRange::new(1_000.0, 30_000.0)),
            ("magnitude", ParameterRange::new(5.0, 7.0)),
        ] {
            inner.ranges.insert(name.to_string(), range);
        }
        ProblemConfig::Centroid(inner)
    }

    fn config() -> Config {
        Config::new(
            "runs/${problem_name}",
            DatasetConfig::new("data/events.yaml"),
            problem_config(),
        )
    }

    #[test]
    fn validate_accepts_a_complete_config() {
        config().validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_rundir_template() {
        let mut c = config();
        c.rundir_template = "  ".to_string();
        match c.validate().unwrap_err() {
            ConfigError::Invalid { detail } => assert!(detail.contains("rundir_template")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_unknown_rundir_variable() {
        let mut c = config();
        c.rundir_template = "runs/${runid}".to_string();
        match c.validate().unwrap_err() {
            ConfigError::RundirTemplate { .. } => {}
            other => panic!("expected RundirTemplate, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_bad_target_group() {
        let mut c = config();
        c.target_groups
            .push(TargetGroup::Waveform(WaveformTargetGroup::new(&[])));
        match c.validate().unwrap_err() {
            ConfigError::Target(_) => {}
            other => panic!("expected Target, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_missing_parameter_range() {
        let mut c = config();
        c.problem_config = ProblemConfig::Centroid(CentroidProblemConfig::default());
        match c.validate().unwrap_err() {
            ConfigError::Problem(_) => {}
            other => panic!("expected Problem, got {other:?}"),
        }
    }

    #[test]
    fn expand_rundir_binds_both_variables() {
        let mut c = config();
        c.rundir_template = "runs/${event_name}/${problem_name}".to_string();
        c.set_basepath(Path::new("/project"));
        let rundir = c.expand_rundir("ev001", "centroid_ev001").unwrap();
        assert_eq!(rundir, PathBuf::from("/project/runs/ev001/centroid_ev001"));
    }

    #[test]
    fn basepath_propagates_to_nested_configs() {
        let mut c = config();
        c.set_basepath(Path::new("/project"));
        assert_eq!(c.dataset_config.get_basepath(), Some(Path::new("/project")));
        assert_eq!(c.engine_config.get_basepath(), Some(Path::new("/project")));
        assert_eq!(
            c.dataset_config.expand_path(Path::new("data/events.yaml")),
            PathBuf::from("/project/data/events.yaml")
        );
    }

    #[test]
    fn config_prefix_is_inherited_by_nested_configs() {
        let mut c = config();
        c.path_prefix = Some(PathBuf::from(".."));
        c.set_basepath(Path::new("/project/config"));
        assert_eq!(
            c.dataset_config.expand_path(Path::new("data/events.yaml")),
            PathBuf::from("/project/data/events.yaml")
        );
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = "\
rundir_template: runs/${problem_name}
dataset_config:
  events_path: data/events.yaml
problem_config: !temblor.CentroidProblemConfig
  ranges:
    time: {start: -5.0, stop: 5.0}
    north_shift: {start: -1.0, stop: 1.0}
    east_shift: {start: -1.0, stop: 1.0}
    depth: {start: 0.0, stop: 1.0}
    magnitude: {start: 5.0, stop: 6.0}
";
        let c: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(c.analyser_configs.len(), 1);
        assert!(matches!(
            c.analyser_configs[0],
            AnalyserConfig::TargetBalancing(_)
        ));
        assert!(matches!(c.optimiser_config, OptimiserConfig::HighScore(_)));
        assert!(c.engine_config.gf_stores_from_user_config);
        assert!(c.target_groups.is_empty());
        c.validate().unwrap();
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "\
rundir_template: runs/${problem_name}
dataset_config:
  events_path: data/events.yaml
problem_config: !temblor.CentroidProblemConfig
  ranges:
    time: {start: -5.0, stop: 5.0}
    north_shift: {start: -1.0, stop: 1.0}
    east_shift: {start: -1.0, stop: 1.0}
    depth: {start: 0.0, stop: 1.0}
    magnitude: {start: 5.0, stop: 6.0}
rundir: runs
";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn analysers_and_optimiser_are_buildable() {
        let c = config();
        assert_eq!(c.get_analysers().unwrap().len(), 1);
        assert_eq!(c.get_optimiser().unwrap().niterations(), 20_000);
    }
}
