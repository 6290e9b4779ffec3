//! Inversion problem definitions, analysers, and the optimiser.
//!
//! A [`ProblemConfig`] turns an event and its enumerated targets into a
//! boxed [`Problem`]: a named parameter space with bounds, a base
//! source, and the mapping between parameter vectors and concrete
//! source models. [`Analyser`]s adjust an assembled problem in place;
//! the [`Optimiser`] drives the sampling loop against it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod analyser;
pub mod centroid;
pub mod config;
pub mod error;
pub mod optimiser;
pub mod problem;

pub use analyser::{
    Analyser, AnalyserConfig, TargetBalancingAnalyser, TargetBalancingAnalyserConfig,
};
pub use centroid::CentroidProblem;
pub use config::{CentroidProblemConfig, ProblemConfig};
pub use error::{AnalyserError, OptimiserError, ProblemError};
pub use optimiser::{HighScoreOptimiser, HighScoreOptimiserConfig, Optimiser, OptimiserConfig};
pub use problem::{ParameterRange, Problem};
