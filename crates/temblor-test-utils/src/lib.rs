//! Shared test fixtures for the temblor workspace.
//!
//! Deterministic events, station layouts and on-disk scaffolding
//! (catalog files, station files, Green's-function store directories)
//! used by the test suites of the higher-level crates.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(missing_docs)]

pub mod fixtures;

pub use fixtures::{make_store, ring_stations, test_event, write_events_file, write_stations_file};
