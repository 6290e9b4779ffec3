//! GNSS campaign target groups.

use serde::{Deserialize, Serialize};

use temblor_core::{geo, Event};
use temblor_dataset::Dataset;

use crate::error::TargetError;
use crate::group::{default_true, default_weight};
use crate::target::{Quantity, Target};

fn default_components() -> Vec<String> {
    vec!["N".to_string(), "E".to_string(), "U".to_string()]
}

/// Selects static-offset observations from GNSS campaign sites: every
/// usable station, times the configured displacement components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GnssCampaignTargetGroup {
    /// Disabled groups produce no targets but keep their naming index.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Displacement components to fit; defaults to north, east, up.
    #[serde(default = "default_components")]
    pub components: Vec<String>,
    /// Green's-function store for these targets, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Manual weight applied to every target of this group.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Default for GnssCampaignTargetGroup {
    fn default() -> Self {
        Self {
            enabled: true,
            components: default_components(),
            store_id: None,
            weight: 1.0,
        }
    }
}

impl GnssCampaignTargetGroup {
    /// Enumerate targets: all stations, times components in
    /// configuration order. GNSS observes displacement only.
    pub fn get_targets(&self, dataset: &Dataset, event: &Event, name_prefix: &str) -> Vec<Target> {
        let mut targets = Vec::new();
        for station in dataset.stations() {
            let distance_m = geo::distance_m(event.lat, event.lon, station.lat, station.lon);
            for component in &self.components {
                targets.push(Target {
                    path: format!("{name_prefix}.{}.{component}", station.codes),
                    codes: station.codes.clone(),
                    channel: component.clone(),
                    quantity: Quantity::Displacement,
                    distance_m,
                    store_id: self.store_id.clone(),
                    manual_weight: self.weight,
                    balancing_weight: None,
                });
            }
        }
        targets
    }

    /// Check components and weight.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.components.is_empty() {
            return Err(TargetError::NoChannels);
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(TargetError::InvalidWeight { got: self.weight });
        }
        Ok(())
    }
}
