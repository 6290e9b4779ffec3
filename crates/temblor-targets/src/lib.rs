//! Observation target groups and target enumeration.
//!
//! A configuration declares [`TargetGroup`]s; the assembly pipeline asks
//! each enabled group to enumerate concrete [`Target`]s against a
//! dataset and event. Target names are built from a caller-supplied
//! prefix, the station codes and the channel, so they stay stable across
//! configuration edits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gnss;
pub mod group;
pub mod target;
pub mod waveform;

pub use error::TargetError;
pub use gnss::GnssCampaignTargetGroup;
pub use group::TargetGroup;
pub use target::{Quantity, Target};
pub use waveform::WaveformTargetGroup;
