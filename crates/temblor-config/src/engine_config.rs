//! Engine configuration with lazy, cached construction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

use temblor_core::paths::{HasPaths, PathFrame};
use temblor_gf::{EngineError, LocalEngine};

/// Where Green's-function stores live and how to discover them.
///
/// The engine is built on first use and cached for the lifetime of this
/// object; the filesystem scan happens at most once. Deliberately not
/// `Clone` and not `Sync`: each configuration owns exactly one engine
/// handle, and first access must not race.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Also probe the store locations from the user's ambient
    /// configuration file.
    #[serde(default = "default_true")]
    pub gf_stores_from_user_config: bool,
    /// Directories whose subdirectories are scanned for stores.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gf_store_superdirs: Vec<PathBuf>,
    /// Directories that are stores themselves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gf_store_dirs: Vec<PathBuf>,
    /// Prefix inserted between the base directory and this node's
    /// relative paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<PathBuf>,
    #[serde(skip)]
    frame: PathFrame,
    #[serde(skip)]
    engine: OnceCell<Arc<LocalEngine>>,
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gf_stores_from_user_config: true,
            gf_store_superdirs: Vec::new(),
            gf_store_dirs: Vec::new(),
            path_prefix: None,
            frame: PathFrame::default(),
            engine: OnceCell::new(),
        }
    }
}

impl EngineConfig {
    /// The engine for this configuration, built on the first call.
    ///
    /// Construction expands the configured locations against the base
    /// directory and probes them; every later call returns the same
    /// handle without re-scanning. A store added to a super-directory
    /// after the first call is therefore not visible.
    pub fn get_engine(&self) -> Result<&Arc<LocalEngine>, EngineError> {
        self.engine.get_or_try_init(|| {
            let superdirs = self.expand_paths(&self.gf_store_superdirs);
            let dirs = self.expand_paths(&self.gf_store_dirs);
            Ok(Arc::new(LocalEngine::new(
                self.gf_stores_from_user_config,
                &superdirs,
                &dirs,
            )?))
        })
    }
}

impl HasPaths for EngineConfig {
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
