//! Owned per-event data snapshots.

use temblor_core::{Event, Station};

use crate::synthetic::SyntheticTest;

/// Everything the assembly pipeline needs for one event: the event
/// itself, the usable stations and an optional synthetic test.
///
/// Built by [`DatasetConfig::get_dataset`](crate::DatasetConfig::get_dataset);
/// owns its data, so it stays valid while the configuration tree is
/// mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    event: Event,
    stations: Vec<Station>,
    synthetic_test: Option<SyntheticTest>,
}

impl Dataset {
    /// Assemble a dataset from its parts.
    pub fn new(event: Event, stations: Vec<Station>, synthetic_test: Option<SyntheticTest>) -> Self {
        Self {
            event,
            stations,
            synthetic_test,
        }
    }

    /// The selected event.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Stations after blacklist/whitelist filtering, in file order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The synthetic test, if the dataset configuration carries one.
    pub fn synthetic_test(&self) -> Option<&SyntheticTest> {
        self.synthetic_test.as_ref()
    }

    /// Mutable access to the synthetic test, for binding it to a problem.
    pub fn synthetic_test_mut(&mut self) -> Option<&mut SyntheticTest> {
        self.synthetic_test.as_mut()
    }
}
