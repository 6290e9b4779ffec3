//! Dataset configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use temblor_core::paths::{HasPaths, PathFrame};
use temblor_core::{Event, Station};

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::synthetic::SyntheticTest;

/// Where a project's observational data lives and how to filter it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Event catalog file, a YAML list of events.
    pub events_path: PathBuf,
    /// Station file, a YAML list of stations. Without one the dataset
    /// has no stations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stations_path: Option<PathBuf>,
    /// Station patterns to exclude, in `NET`, `NET.STA` or `NET.STA.LOC`
    /// form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,
    /// If non-empty, only stations matching one of these patterns are
    /// kept. Applied after the blacklist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist: Vec<String>,
    /// Replace observed data with forward-modelled data from known
    /// source parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic_test: Option<SyntheticTest>,
    /// Prefix inserted between the base directory and this node's
    /// relative paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<PathBuf>,
    #[serde(skip)]
    frame: PathFrame,
}

impl DatasetConfig {
    /// Configuration with just an event catalog; everything else at its
    /// default.
    pub fn new(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
            stations_path: None,
            blacklist: Vec::new(),
            whitelist: Vec::new(),
            synthetic_test: None,
            path_prefix: None,
            frame: PathFrame::default(),
        }
    }

    /// Load the event catalog, preserving file order.
    pub fn get_events(&self) -> Result<Vec<Event>, DatasetError> {
        let path = self.expand_path(&self.events_path);
        load_events(&path)
    }

    /// Names of all cataloged events, in file order.
    pub fn get_event_names(&self) -> Result<Vec<String>, DatasetError> {
        Ok(self.get_events()?.into_iter().map(|e| e.name).collect())
    }

    /// Look up one event by name.
    pub fn get_event(&self, name: &str) -> Result<Event, DatasetError> {
        self.get_events()?
            .into_iter()
            .find(|e| e.name == name)
            .ok_or_else(|| DatasetError::NoSuchEvent {
                name: name.to_string(),
            })
    }

    /// Load the station file and apply blacklist/whitelist filtering.
    pub fn get_stations(&self) -> Result<Vec<Station>, DatasetError> {
        let stations = match &self.stations_path {
            None => Vec::new(),
            Some(path) => load_stations(&self.expand_path(path))?,
        };
        Ok(self.apply_station_filters(stations))
    }

    /// Build the owned data snapshot for one event.
    ///
    /// The snapshot carries a copy of the (unbound) synthetic test;
    /// binding it to a problem happens on the snapshot, never on the
    /// configuration.
    pub fn get_dataset(&self, event_name: &str) -> Result<Dataset, DatasetError> {
        let event = self.get_event(event_name)?;
        let stations = self.get_stations()?;
        Ok(Dataset::new(event, stations, self.synthetic_test.clone()))
    }

    fn apply_station_filters(&self, stations: Vec<Station>) -> Vec<Station> {
        stations
            .into_iter()
            .filter(|s| !self.blacklist.iter().any(|p| s.codes.matches(p)))
            .filter(|s| {
                self.whitelist.is_empty() || self.whitelist.iter().any(|p| s.codes.matches(p))
            })
            .collect()
    }
}

impl HasPaths for DatasetConfig {
    fn path_frame(&self) -> &PathFrame {
        &self.frame
    }
    fn path_frame_mut(&mut self) -> &mut PathFrame {
        &mut self.frame
    }
    fn path_prefix(&self) -> Option<&Path> {
        self.path_prefix.as_deref()
    }
    fn set_path_prefix(&mut self, prefix: Option<PathBuf>) {
        self.path_prefix = prefix;
    }
}

fn load_events(path: &Path) -> Result<Vec<Event>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events: Vec<Event> =
        serde_yaml::from_str(&text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for event in &events {
        if !seen.insert(event.name.as_str()) {
            return Err(DatasetError::DuplicateEvent {
                name: event.name.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(events)
}

fn load_stations(path: &Path) -> Result<Vec<Station>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
