//! Concrete observation targets.

use serde::{Deserialize, Serialize};

use temblor_core::StationCodes;

/// Physical quantity a target observes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Ground displacement.
    #[default]
    Displacement,
    /// Ground velocity.
    Velocity,
}

/// One station/channel combination an inversion is fitted against.
///
/// Produced by target group enumeration; never part of the persisted
/// configuration. `path` is the stable name downstream results refer to:
/// `"<prefix>.<NET>.<STA>.<LOC>.<channel>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Stable hierarchical name of this target.
    pub path: String,
    /// Station the observation comes from.
    pub codes: StationCodes,
    /// Channel or component code, e.g. `"Z"` or `"N"`.
    pub channel: String,
    /// Observed physical quantity.
    pub quantity: Quantity,
    /// Event-to-station distance in metres, fixed at enumeration time.
    pub distance_m: f64,
    /// Green's-function store the forward model should use, if pinned.
    pub store_id: Option<String>,
    /// Weight from the group configuration.
    pub manual_weight: f64,
    /// Weight assigned by a balancing analyser, if one ran.
    pub balancing_weight: Option<f64>,
}

impl Target {
    /// The weight actually applied in misfit evaluation.
    pub fn effective_weight(&self) -> f64 {
        self.manual_weight * self.balancing_weight.unwrap_or(1.0)
    }
}
