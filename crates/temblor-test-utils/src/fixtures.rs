//! Fixture builders.

use std::fs;
use std::path::{Path, PathBuf};

use temblor_core::{geo, Event, Station, StationCodes};
use temblor_gf::STORE_CONFIG_FILENAME;

/// A deterministic event at 42N 13E, depth 9 km, magnitude 6.0.
pub fn test_event(name: &str) -> Event {
    Event {
        name: name.to_string(),
        time: 1.0e9,
        lat: 42.0,
        lon: 13.0,
        depth: 9_000.0,
        magnitude: 6.0,
    }
}

/// Stations around `event`, one per requested distance, at evenly
/// spread azimuths. Distances are exact; codes are `XX.S000.`,
/// `XX.S001.`, in input order.
pub fn ring_stations(event: &Event, distances_m: &[f64]) -> Vec<Station> {
    let n = distances_m.len().max(1) as f64;
    distances_m
        .iter()
        .enumerate()
        .map(|(i, &distance)| {
            let azimuth = 360.0 * i as f64 / n;
            let (lat, lon) = geo::latlon_at(event.lat, event.lon, azimuth, distance);
            Station {
                codes: StationCodes::new("XX", format!("S{i:03}"), ""),
                lat,
                lon,
                elevation: 0.0,
            }
        })
        .collect()
}

/// Write an event catalog file `events.yaml` under `dir`.
pub fn write_events_file(dir: &Path, events: &[Event]) -> PathBuf {
    let path = dir.join("events.yaml");
    let yaml = serde_yaml::to_string(events).expect("serialize events");
    fs::write(&path, yaml).expect("write events file");
    path
}

/// Write a station file `stations.yaml` under `dir`.
pub fn write_stations_file(dir: &Path, stations: &[Station]) -> PathBuf {
    let path = dir.join("stations.yaml");
    let yaml = serde_yaml::to_string(stations).expect("serialize stations");
    fs::write(&path, yaml).expect("write stations file");
    path
}

/// Create a minimal Green's-function store directory `dirname` under
/// `parent`, with the given store id.
pub fn make_store(parent: &Path, dirname: &str, id: &str) -> PathBuf {
    let dir = parent.join(dirname);
    fs::create_dir_all(&dir).expect("create store dir");
    fs::write(
        dir.join(STORE_CONFIG_FILENAME),
        format!("id: {id}\nsample_rate: 2.0\n"),
    )
    .expect("write store config");
    dir
}
