//! Green's-function store discovery and registry.
//!
//! A store is a directory holding precomputed Green's functions plus a
//! `config.yaml` describing them. [`LocalEngine`] probes configured
//! locations once, at construction, and afterwards answers id lookups
//! without touching the filesystem again:
//!
//! - direct store directories must be stores ([`EngineError::NotAStore`]
//!   otherwise)
//! - super-directories are scanned, non-store entries are skipped
//! - the user's ambient config file ([`UserConfig`]) can contribute
//!   additional locations
//!
//! Construction is fail-fast: duplicate ids, malformed store configs and
//! unreadable locations all abort it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod store;
pub mod user_config;

pub use engine::LocalEngine;
pub use error::EngineError;
pub use store::{StoreConfig, STORE_CONFIG_FILENAME};
pub use user_config::{UserConfig, USER_CONFIG_ENV};
