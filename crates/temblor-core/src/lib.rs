//! Core meta types for the temblor seismic-source inversion pipeline.
//!
//! Everything here is shared by the higher-level crates:
//!
//! - event, station and source records ([`Event`], [`Station`], [`Source`])
//! - dotted station identifiers ([`StationCodes`])
//! - base-path and path-prefix mechanics ([`HasPaths`], [`PathFrame`])
//! - `${variable}` template expansion ([`expand_template`])
//! - small spherical-geodesy kernels ([`geo`])
//! - the minimal problem view consumed by synthetic tests ([`Parameterized`])
//!
//! No filesystem access happens in this crate; path expansion is purely
//! lexical and file loading lives with the dataset layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod error;
pub mod event;
pub mod geo;
pub mod paths;
pub mod source;
pub mod station;
pub mod template;
pub mod traits;

pub use codes::StationCodes;
pub use error::{CodesError, TemplateError};
pub use event::Event;
pub use paths::{normpath, relpath, xjoin, HasPaths, PathFrame};
pub use source::Source;
pub use station::Station;
pub use template::expand_template;
pub use traits::Parameterized;
