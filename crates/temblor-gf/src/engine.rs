//! Store registry construction and lookup.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::EngineError;
use crate::store::{StoreConfig, STORE_CONFIG_FILENAME};
use crate::user_config::UserConfig;

#[derive(Debug)]
struct RegisteredStore {
    path: PathBuf,
    config: StoreConfig,
}

/// Registry of Green's-function stores, built once from configured
/// locations.
///
/// All filesystem probing happens in [`LocalEngine::new`]; lookups
/// afterwards are in-memory only. Ids keep registration order.
#[derive(Debug)]
pub struct LocalEngine {
    stores: IndexMap<String, RegisteredStore>,
}

impl LocalEngine {
    /// Probe the given locations and register every store found.
    ///
    /// Direct `store_dirs` entries are registered first and must each be
    /// a store; `store_superdirs` are then scanned in order, with their
    /// entries visited in name order and non-store entries skipped. With
    /// `use_config` set, locations from the user's [`UserConfig`] are
    /// appended to the respective lists before probing.
    pub fn new(
        use_config: bool,
        store_superdirs: &[PathBuf],
        store_dirs: &[PathBuf],
    ) -> Result<Self, EngineError> {
        let mut superdirs = store_superdirs.to_vec();
        let mut dirs = store_dirs.to_vec();
        if use_config {
            let user = UserConfig::load_default()?;
            superdirs.extend(user.gf_store_superdirs);
            dirs.extend(user.gf_store_dirs);
        }

        let mut engine = LocalEngine {
            stores: IndexMap::new(),
        };
        for dir in &dirs {
            engine.register_store(dir)?;
        }
        for superdir in &superdirs {
            engine.scan_superdir(superdir)?;
        }
        Ok(engine)
    }

    fn register_store(&mut self, dir: &Path) -> Result<(), EngineError> {
        let config_path = dir.join(STORE_CONFIG_FILENAME);
        if !config_path.is_file() {
            return Err(EngineError::NotAStore {
                path: dir.to_path_buf(),
            });
        }
        let text = fs::read_to_string(&config_path).map_err(|source| EngineError::Io {
            path: config_path.clone(),
            source,
        })?;
        let config: StoreConfig =
            serde_yaml::from_str(&text).map_err(|source| EngineError::StoreConfig {
                path: config_path.clone(),
                source,
            })?;
        config.validate(&config_path)?;

        if let Some(existing) = self.stores.get(&config.id) {
            return Err(EngineError::DuplicateStore {
                id: config.id.clone(),
                first: existing.path.clone(),
                second: dir.to_path_buf(),
            });
        }
        self.stores.insert(
            config.id.clone(),
            RegisteredStore {
                path: dir.to_path_buf(),
                config,
            },
        );
        Ok(())
    }

    fn scan_superdir(&mut self, superdir: &Path) -> Result<(), EngineError> {
        let entries = fs::read_dir(superdir).map_err(|source| EngineError::Io {
            path: superdir.to_path_buf(),
            source,
        })?;
        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| EngineError::Io {
                path: superdir.to_path_buf(),
                source,
            })?;
            candidates.push(entry.path());
        }
        candidates.sort();
        for candidate in candidates {
            if candidate.is_dir() && candidate.join(STORE_CONFIG_FILENAME).is_file() {
                self.register_store(&candidate)?;
            }
        }
        Ok(())
    }

    /// Number of registered stores.
    pub fn nstores(&self) -> usize {
        self.stores.len()
    }

    /// Registered ids, in registration order.
    pub fn store_ids(&self) -> Vec<&str> {
        self.stores.keys().map(String::as_str).collect()
    }

    /// True when a store with this id is registered.
    pub fn have_store(&self, id: &str) -> bool {
        self.stores.contains_key(id)
    }

    /// Directory of the store with this id.
    pub fn store_path(&self, id: &str) -> Result<&Path, EngineError> {
        self.stores
            .get(id)
            .map(|store| store.path.as_path())
            .ok_or_else(|| EngineError::NoSuchStore { id: id.to_string() })
    }

    /// Configuration of the store with this id.
    pub fn store_config(&self, id: &str) -> Result<&StoreConfig, EngineError> {
        self.stores
            .get(id)
            .map(|store| &store.config)
            .ok_or_else(|| EngineError::NoSuchStore { id: id.to_string() })
    }

    /// Iterate over `(id, config)` pairs in registration order.
    pub fn stores(&self) -> impl Iterator<Item = (&str, &StoreConfig)> {
        self.stores
            .iter()
            .map(|(id, store)| (id.as_str(), &store.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_locations_yield_empty_engine() {
        let engine = LocalEngine::new(false, &[], &[]).unwrap();
        assert_eq!(engine.nstores(), 0);
        assert!(engine.store_ids().is_empty());
    }

    #[test]
    fn lookup_on_empty_engine_is_no_such_store() {
        let engine = LocalEngine::new(false, &[], &[]).unwrap();
        let err = engine.store_path("crust_10hz").unwrap_err();
        match err {
            EngineError::NoSuchStore { id } => assert_eq!(id, "crust_10hz"),
            other => panic!("expected NoSuchStore, got {other:?}"),
        }
    }
}
