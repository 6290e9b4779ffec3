//! The closed set of target group kinds.

use serde::{Deserialize, Serialize};

use temblor_core::Event;
use temblor_dataset::Dataset;

use crate::error::TargetError;
use crate::gnss::GnssCampaignTargetGroup;
use crate::target::Target;
use crate::waveform::WaveformTargetGroup;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_weight() -> f64 {
    1.0
}

/// One target group of a configuration.
///
/// Serializes with a `!temblor.…` tag naming the concrete kind, the
/// same scheme the top-level configuration document uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TargetGroup {
    /// Waveform observations.
    #[serde(rename = "temblor.WaveformTargetGroup")]
    Waveform(WaveformTargetGroup),
    /// GNSS campaign static offsets.
    #[serde(rename = "temblor.GnssCampaignTargetGroup")]
    GnssCampaign(GnssCampaignTargetGroup),
}

impl TargetGroup {
    /// Whether this group participates in target enumeration.
    pub fn enabled(&self) -> bool {
        match self {
            TargetGroup::Waveform(g) => g.enabled,
            TargetGroup::GnssCampaign(g) => g.enabled,
        }
    }

    /// Enumerate concrete targets against a dataset and event.
    ///
    /// `name_prefix` becomes the leading component of every target path;
    /// the caller derives it from the group's position in the
    /// configuration.
    pub fn get_targets(&self, dataset: &Dataset, event: &Event, name_prefix: &str) -> Vec<Target> {
        match self {
            TargetGroup::Waveform(g) => g.get_targets(dataset, event, name_prefix),
            TargetGroup::GnssCampaign(g) => g.get_targets(dataset, event, name_prefix),
        }
    }

    /// Validate the concrete group configuration.
    pub fn validate(&self) -> Result<(), TargetError> {
        match self {
            TargetGroup::Waveform(g) => g.validate(),
            TargetGroup::GnssCampaign(g) => g.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let group = TargetGroup::Waveform(WaveformTargetGroup::new(&["Z"]));
        let yaml = serde_yaml::to_string(&group).unwrap();
        assert!(
            yaml.starts_with("!temblor.WaveformTargetGroup"),
            "unexpected yaml: {yaml}"
        );
    }

    #[test]
    fn deserializes_by_kind_tag() {
        let yaml = "\
!temblor.GnssCampaignTargetGroup
enabled: false
components: [N, E]
";
        let group: TargetGroup = serde_yaml::from_str(yaml).unwrap();
        match &group {
            TargetGroup::GnssCampaign(g) => {
                assert!(!g.enabled);
                assert_eq!(g.components, vec!["N", "E"]);
            }
            other => panic!("expected GnssCampaign, got {other:?}"),
        }
        assert!(!group.enabled());
    }

    #[test]
    fn unknown_kind_tag_fails() {
        let yaml = "!temblor.LaserTargetGroup\nenabled: true\n";
        assert!(serde_yaml::from_str::<TargetGroup>(yaml).is_err());
    }

    #[test]
    fn tagged_round_trip_preserves_fields() {
        let mut inner = WaveformTargetGroup::new(&["Z", "R"]);
        inner.distance_max = Some(300_000.0);
        inner.weight = 1.5;
        let yaml = serde_yaml::to_string(&TargetGroup::Waveform(inner)).unwrap();

        let back: TargetGroup = serde_yaml::from_str(&yaml).unwrap();
        match back {
            TargetGroup::Waveform(g) => {
                assert_eq!(g.channels, vec!["Z", "R"]);
                assert_eq!(g.distance_max, Some(300_000.0));
                assert_eq!(g.weight, 1.5);
            }
            other => panic!("expected Waveform, got {other:?}"),
        }
    }
}
