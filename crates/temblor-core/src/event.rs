//! Seismic event records.

use serde::{Deserialize, Serialize};

/// A seismic event as listed in an event catalog file.
///
/// Event files are YAML lists of these records; file order is meaningful
/// and preserved by the dataset layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Catalog name, unique within one event file.
    pub name: String,
    /// Origin time as seconds since the Unix epoch.
    pub time: f64,
    /// Hypocenter latitude in degrees.
    pub lat: f64,
    /// Hypocenter longitude in degrees.
    pub lon: f64,
    /// Hypocenter depth in metres.
    pub depth: f64,
    /// Moment magnitude.
    pub magnitude: f64,
}
