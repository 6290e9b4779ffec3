//! Root configuration aggregate and modelling-environment assembly.
//!
//! A [`Config`] ties the whole pipeline together: it owns the dataset,
//! target group, problem, analyser, optimiser and engine configurations,
//! resolves every relative path against the directory its file was
//! loaded from, and assembles fully wired problems via
//! [`Config::get_problem`]. [`read_config`] and [`write_config`] handle
//! the tagged YAML document format and the base-directory bookkeeping
//! around it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine_config;
pub mod error;
pub mod io;

pub use config::Config;
pub use engine_config::EngineConfig;
pub use error::ConfigError;
pub use io::{read_config, write_config, CONFIG_TAG};
