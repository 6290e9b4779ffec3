//! Dotted station identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodesError;

/// Network, station and location codes identifying a recording site.
///
/// Renders as the dotted form `NET.STA.LOC`; the location component is
/// commonly empty (`"GE.STA01."`). Serializes as that string.
///
/// # Examples
///
/// ```
/// use temblor_core::StationCodes;
///
/// let codes: StationCodes = "GE.STA01.".parse().unwrap();
/// assert_eq!(codes.network, "GE");
/// assert_eq!(codes.station, "STA01");
/// assert_eq!(codes.location, "");
/// assert_eq!(codes.to_string(), "GE.STA01.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCodes {
    /// Network code, may be empty.
    pub network: String,
    /// Station code, never empty.
    pub station: String,
    /// Location code, may be empty.
    pub location: String,
}

impl StationCodes {
    /// Build codes from the three components.
    pub fn new(
        network: impl Into<String>,
        station: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            station: station.into(),
            location: location.into(),
        }
    }

    /// True when `pattern` selects this site.
    ///
    /// Patterns are the truncated dotted forms used by blacklists and
    /// whitelists: `NET`, `NET.STA` or `NET.STA.LOC`.
    pub fn matches(&self, pattern: &str) -> bool {
        let mut parts = pattern.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(net), None, ..) => net == self.network,
            (Some(net), Some(sta), None, _) => net == self.network && sta == self.station,
            (Some(net), Some(sta), Some(loc), None) => {
                net == self.network && sta == self.station && loc == self.location
            }
            _ => false,
        }
    }
}

impl fmt::Display for StationCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.network, self.station, self.location)
    }
}

impl FromStr for StationCodes {
    type Err = CodesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(CodesError::Malformed {
                value: s.to_string(),
            });
        }
        if parts[1].is_empty() {
            return Err(CodesError::MissingStation {
                value: s.to_string(),
            });
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl Serialize for StationCodes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StationCodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_codes() {
        let codes: StationCodes = "GE.STA01.00".parse().unwrap();
        assert_eq!(codes, StationCodes::new("GE", "STA01", "00"));
    }

    #[test]
    fn parse_empty_location() {
        let codes: StationCodes = "GE.STA01.".parse().unwrap();
        assert_eq!(codes.location, "");
    }

    #[test]
    fn parse_two_parts_fails() {
        let err = "GE.STA01".parse::<StationCodes>().unwrap_err();
        assert!(matches!(err, CodesError::Malformed { .. }));
    }

    #[test]
    fn parse_empty_station_fails() {
        let err = "GE..00".parse::<StationCodes>().unwrap_err();
        assert!(matches!(err, CodesError::MissingStation { .. }));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let codes = StationCodes::new("XX", "ABC", "01");
        let parsed: StationCodes = codes.to_string().parse().unwrap();
        assert_eq!(parsed, codes);
    }

    #[test]
    fn matches_truncated_patterns() {
        let codes = StationCodes::new("GE", "STA01", "00");
        assert!(codes.matches("GE"));
        assert!(codes.matches("GE.STA01"));
        assert!(codes.matches("GE.STA01.00"));
        assert!(!codes.matches("GE.STA01."));
        assert!(!codes.matches("XX"));
        assert!(!codes.matches("GE.STA02"));
    }

    #[test]
    fn serializes_as_dotted_string() {
        let codes = StationCodes::new("GE", "STA01", "");
        let yaml = serde_yaml::to_string(&codes).unwrap();
        assert_eq!(yaml.trim(), "GE.STA01.");
        let back: StationCodes = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, codes);
    }
}
