//! Point-source model descriptions.

use crate::event::Event;
use crate::geo;

/// A point source, the model a problem inverts for.
///
/// The source is anchored at reference coordinates (`lat`, `lon`) and
/// displaced by local Cartesian offsets in metres. Problems move the
/// offsets, not the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Name, conventionally the originating event's name.
    pub name: String,
    /// Origin time as seconds since the Unix epoch.
    pub time: f64,
    /// Reference latitude in degrees.
    pub lat: f64,
    /// Reference longitude in degrees.
    pub lon: f64,
    /// Northward offset from the reference coordinates in metres.
    pub north_shift: f64,
    /// Eastward offset from the reference coordinates in metres.
    pub east_shift: f64,
    /// Depth in metres.
    pub depth: f64,
    /// Moment magnitude.
    pub magnitude: f64,
}

impl Source {
    /// Nominal source for an event: anchored at the hypocenter, zero offsets.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            time: event.time,
            lat: event.lat,
            lon: event.lon,
            north_shift: 0.0,
            east_shift: 0.0,
            depth: event.depth,
            magnitude: event.magnitude,
        }
    }

    /// Geographic coordinates with the north/east offsets applied.
    pub fn effective_latlon(&self) -> (f64, f64) {
        geo::ne_to_latlon(self.lat, self.lon, self.north_shift, self.east_shift)
    }
}
