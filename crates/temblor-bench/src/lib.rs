//! Benchmark profiles and utilities for the temblor assembly pipeline.
//!
//! Provides pre-built [`Config`] profiles for benchmarking and examples:
//!
//! - [`reference_config`]: three target groups over a `data/` +
//!   `gf_stores/` project layout
//! - [`stress_config`]: many waveform groups for enumeration stress
//! - [`bench_distances`]: deterministic station distances via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use temblor_config::Config;
use temblor_dataset::DatasetConfig;
use temblor_problem::{CentroidProblemConfig, ParameterRange, ProblemConfig};
use temblor_targets::{GnssCampaignTargetGroup, TargetGroup, WaveformTargetGroup};

/// Build a reference configuration: a distance-windowed broadband group,
/// a vertical-only group and a GNSS campaign group.
///
/// Paths are relative to a project root holding `data/events.yaml`,
/// `data/stations.yaml` and a `gf_stores/` super-directory; anchor the
/// configuration with `set_basepath` before touching the filesystem.
pub fn reference_config() -> Config {
    let mut dataset = DatasetConfig::new("data/events.yaml");
    dataset.stations_path = Some("data/stations.yaml".into());

    let mut config = Config::new("runs/${problem_name}", dataset, centroid_problem());

    let mut broadband = WaveformTargetGroup::new(&["Z", "R", "T"]);
    broadband.distance_min = Some(10_000.0);
    broadband.distance_max = Some(300_000.0);
    config.target_groups.push(TargetGroup::Waveform(broadband));
    config
        .target_groups
        .push(TargetGroup::Waveform(WaveformTargetGroup::new(&["Z"])));
    config
        .target_groups
        .push(TargetGroup::GnssCampaign(GnssCampaignTargetGroup::default()));

    config.engine_config.gf_stores_from_user_config = false;
    config.engine_config.gf_store_superdirs = vec!["gf_stores".into()];
    config
}

/// Build a stress configuration: `ngroups` three-channel waveform
/// groups over the same project layout as [`reference_config`].
pub fn stress_config(ngroups: usize) -> Config {
    let mut config = reference_config();
    config.target_groups.clear();
    for _ in 0..ngroups {
        config
            .target_groups
            .push(TargetGroup::Waveform(WaveformTargetGroup::new(&[
                "Z", "R", "T",
            ])));
    }
    config
}

/// Generate deterministic station distances in metres.
///
/// `n` values in 20..280 km, spread by a multiplicative hash of `seed`
/// so repeated runs place stations identically.
pub fn bench_distances(n: usize, seed: u64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407));
            20_000.0 + (h % 260_000) as f64
        })
        .collect()
}

fn centroid_problem() -> ProblemConfig {
    let mut centroid = CentroidProblemConfig::default();
    for (name, range) in [
        ("time", ParameterRange::new(-10.0, 10.0)),
        ("north_shift", ParameterRange::new(-20_000.0, 20_000.0)),
        ("east_shift", ParameterRange::new(-20_000.0, 20_000.0)),
        ("depth", ParameterRange::new(2_000.0, 20_000.0)),
        ("magnitude", ParameterRange::new(5.0, 7.0)),
    ] {
        centroid.ranges.insert(name.to_string(), range);
    }
    ProblemConfig::Centroid(centroid)
}
