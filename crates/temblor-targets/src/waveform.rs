//! Waveform target groups.

use serde::{Deserialize, Serialize};

use temblor_core::{geo, Event};
use temblor_dataset::Dataset;

use crate::error::TargetError;
use crate::group::{default_true, default_weight};
use crate::target::{Quantity, Target};

/// Selects waveform observations: every usable station within a
/// distance window, times the configured channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveformTargetGroup {
    /// Disabled groups produce no targets but keep their naming index.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Minimum event-to-station distance in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_min: Option<f64>,
    /// Maximum event-to-station distance in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_max: Option<f64>,
    /// Channel codes to fit, e.g. `[Z, R, T]`.
    pub channels: Vec<String>,
    /// Observed quantity.
    #[serde(default)]
    pub quantity: Quantity,
    /// Green's-function store for these targets, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Manual weight applied to every target of this group.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl WaveformTargetGroup {
    /// Group fitting the given channels, everything else at its default.
    pub fn new(channels: &[&str]) -> Self {
        Self {
            enabled: true,
            distance_min: None,
            distance_max: None,
            channels: channels.iter().map(|c| c.to_string()).collect(),
            quantity: Quantity::default(),
            store_id: None,
            weight: 1.0,
        }
    }

    /// Enumerate targets: stations in the distance window, in station
    /// order, times channels in configuration order.
    pub fn get_targets(&self, dataset: &Dataset, event: &Event, name_prefix: &str) -> Vec<Target> {
        let mut targets = Vec::new();
        for station in dataset.stations() {
            let distance_m = geo::distance_m(event.lat, event.lon, station.lat, station.lon);
            if let Some(min) = self.distance_min {
                if distance_m < min {
                    continue;
                }
            }
            if let Some(max) = self.distance_max {
                if distance_m > max {
                    continue;
                }
            }
            for channel in &self.channels {
                targets.push(Target {
                    path: format!("{name_prefix}.{}.{channel}", station.codes),
                    codes: station.codes.clone(),
                    channel: channel.clone(),
                    quantity: self.quantity,
                    distance_m,
                    store_id: self.store_id.clone(),
                    manual_weight: self.weight,
                    balancing_weight: None,
                });
            }
        }
        targets
    }

    /// Check channels, distance window and weight.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.channels.is_empty() {
            return Err(TargetError::NoChannels);
        }
        for bound in [self.distance_min, self.distance_max].into_iter().flatten() {
            if bound < 0.0 {
                return Err(TargetError::NegativeDistance { got: bound });
            }
        }
        if let (Some(min), Some(max)) = (self.distance_min, self.distance_max) {
            if min > max {
                return Err(TargetError::EmptyDistanceRange {
                    distance_min: min,
                    distance_max: max,
                });
            }
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(TargetError::InvalidWeight { got: self.weight });
        }
        Ok(())
    }
}
