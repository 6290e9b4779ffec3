//! Station records.

use serde::{Deserialize, Serialize};

use crate::codes::StationCodes;

/// A recording site as listed in a station file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Station {
    /// Dotted `NET.STA.LOC` identifier.
    pub codes: StationCodes,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation above sea level in metres.
    #[serde(default)]
    pub elevation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_defaults_to_zero() {
        let yaml = "
codes: GE.STA01.
lat: 41.0
lon: 12.0
";
        let station: Station = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(station.elevation, 0.0);
        assert_eq!(station.codes.station, "STA01");
    }
}
