//! Dataset configuration and loading.
//!
//! A [`DatasetConfig`] names the event catalog and station files of a
//! project and optionally carries a [`SyntheticTest`]. Resolving an event
//! name through [`DatasetConfig::get_dataset`] yields an owned
//! [`Dataset`]: the selected event, the filtered station list and a copy
//! of the synthetic test, ready to be wired into a problem.
//!
//! File formats are plain YAML lists; paths resolve through the
//! [`HasPaths`](temblor_core::HasPaths) mechanics of the configuration
//! tree.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod synthetic;

pub use config::DatasetConfig;
pub use dataset::Dataset;
pub use error::DatasetError;
pub use synthetic::SyntheticTest;
