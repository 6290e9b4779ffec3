//! Temblor: configuration and modelling-environment assembly for
//! seismic-source inversion.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Temblor sub-crates. For most users, adding `temblor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use temblor::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! // Describe the parameter space of a centroid inversion.
//! let mut centroid = CentroidProblemConfig::default();
//! for (name, range) in [
//!     ("time", ParameterRange::new(-10.0, 10.0)),
//!     ("north_shift", ParameterRange::new(-20_000.0, 20_000.0)),
//!     ("east_shift", ParameterRange::new(-20_000.0, 20_000.0)),
//!     ("depth", ParameterRange::new(2_000.0, 20_000.0)),
//!     ("magnitude", ParameterRange::new(5.0, 7.0)),
//! ] {
//!     centroid.ranges.insert(name.to_string(), range);
//! }
//!
//! // Tie dataset, targets and problem into one configuration.
//! let mut config = Config::new(
//!     "runs/${problem_name}",
//!     DatasetConfig::new("data/events.yaml"),
//!     ProblemConfig::Centroid(centroid),
//! );
//! config
//!     .target_groups
//!     .push(TargetGroup::Waveform(WaveformTargetGroup::new(&["Z", "R"])));
//! config.validate().unwrap();
//!
//! // Anchor it as if it had been read from /project/temblor.yaml.
//! config.set_basepath(Path::new("/project"));
//! let rundir = config.expand_rundir("ev001", "centroid_ev001").unwrap();
//! assert_eq!(rundir, PathBuf::from("/project/runs/centroid_ev001"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`meta`] | `temblor-core` | Events, stations, sources, codes, paths, templates |
//! | [`gf`] | `temblor-gf` | Green's-function store discovery and registry |
//! | [`dataset`] | `temblor-dataset` | Catalog/station loading and synthetic tests |
//! | [`targets`] | `temblor-targets` | Target groups and target enumeration |
//! | [`problem`] | `temblor-problem` | Problems, analysers, and the optimiser |
//! | [`config`] | `temblor-config` | Root configuration aggregate and document I/O |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared meta types and path mechanics (`temblor-core`).
///
/// Events, stations, sources, dotted station codes, `${variable}`
/// template expansion, and the [`meta::HasPaths`] base-path machinery
/// every configuration node builds on.
pub use temblor_core as meta;

/// Green's-function store discovery and registry (`temblor-gf`).
///
/// [`gf::LocalEngine`] probes store directories once at construction
/// and answers id lookups afterwards.
pub use temblor_gf as gf;

/// Dataset configuration and loading (`temblor-dataset`).
///
/// [`dataset::DatasetConfig`] names the project's catalog and station
/// files and resolves one event into an owned [`dataset::Dataset`].
pub use temblor_dataset as dataset;

/// Observation target groups and target enumeration (`temblor-targets`).
///
/// Declarative [`targets::TargetGroup`]s expand into concrete
/// [`targets::Target`]s against a dataset and event.
pub use temblor_targets as targets;

/// Inversion problems, analysers, and the optimiser (`temblor-problem`).
///
/// The [`problem::Problem`] trait plus the centroid implementation,
/// target-balancing analyser, and highscore optimiser.
pub use temblor_problem as problem;

/// Root configuration aggregate and document I/O (`temblor-config`).
///
/// [`config::Config`] ties everything together; [`config::read_config`]
/// and [`config::write_config`] handle the tagged YAML document format.
pub use temblor_config as config;

/// Common imports for typical Temblor usage.
///
/// ```rust
/// use temblor::prelude::*;
/// ```
///
/// This imports the most frequently used types: the root configuration
/// and its document I/O, the dataset and target layers, the problem
/// trait and its configurations, and the path mechanics.
pub mod prelude {
    // Meta types and path mechanics
    pub use temblor_core::{expand_template, Event, HasPaths, Source, Station, StationCodes};

    // Green's-function stores
    pub use temblor_gf::{LocalEngine, StoreConfig};

    // Dataset
    pub use temblor_dataset::{Dataset, DatasetConfig, SyntheticTest};

    // Targets
    pub use temblor_targets::{GnssCampaignTargetGroup, Target, TargetGroup, WaveformTargetGroup};

    // Problems, analysers, optimiser
    pub use temblor_problem::{
        Analyser, AnalyserConfig, CentroidProblemConfig, Optimiser, OptimiserConfig,
        ParameterRange, Problem, ProblemConfig,
    };

    // Root configuration and document I/O
    pub use temblor_config::{read_config, write_config, Config, EngineConfig};

    // Errors
    pub use temblor_config::ConfigError;
    pub use temblor_dataset::DatasetError;
    pub use temblor_gf::EngineError;
    pub use temblor_problem::ProblemError;
    pub use temblor_targets::TargetError;
}
