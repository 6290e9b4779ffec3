//! Store configuration records.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// File inside a store directory holding its [`StoreConfig`].
pub const STORE_CONFIG_FILENAME: &str = "config.yaml";

/// Metadata describing one Green's-function store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store id, unique within one engine. Referenced from target-group
    /// configurations.
    pub id: String,
    /// Free-form one-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Sampling rate of the stored Green's functions in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
}

fn default_sample_rate() -> f64 {
    1.0
}

impl StoreConfig {
    /// Check id and sampling rate; `path` is the file the config came
    /// from, used for error context.
    pub fn validate(&self, path: &Path) -> Result<(), EngineError> {
        if !is_valid_store_id(&self.id) {
            return Err(EngineError::InvalidStoreConfig {
                path: path.to_path_buf(),
                detail: format!("invalid store id '{}'", self.id),
            });
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(EngineError::InvalidStoreConfig {
                path: path.to_path_buf(),
                detail: format!("sample_rate must be positive, got {}", self.sample_rate),
            });
        }
        Ok(())
    }
}

/// Store ids name directories, so they are restricted to a conservative
/// token alphabet.
fn is_valid_store_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
