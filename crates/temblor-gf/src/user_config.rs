//! Ambient per-user store locations.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Environment variable overriding the user configuration file location.
pub const USER_CONFIG_ENV: &str = "TEMBLOR_CONFIG";

/// Store locations a user keeps outside any particular project.
///
/// Read from [`USER_CONFIG_ENV`] if set, else
/// `$HOME/.config/temblor/config.yaml`. Merged into engine construction
/// when a project's engine configuration opts in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Directories each holding a collection of stores.
    #[serde(default)]
    pub gf_store_superdirs: Vec<PathBuf>,
    /// Directories that are stores themselves.
    #[serde(default)]
    pub gf_store_dirs: Vec<PathBuf>,
}

impl UserConfig {
    /// Location of the user configuration file, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(USER_CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        env::var_os("HOME").map(|home| {
            Path::new(&home)
                .join(".config")
                .join("temblor")
                .join("config.yaml")
        })
    }

    /// Load from `path`. A missing file is the empty default; a present
    /// but malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        match fs::read_to_string(path) {
            Ok(text) => serde_yaml::from_str(&text).map_err(|source| EngineError::UserConfig {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(EngineError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from the default location; no determinable location yields
    /// the empty default.
    pub fn load_default() -> Result<Self, EngineError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = UserConfig::load(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(loaded, UserConfig::default());
    }

    #[test]
    fn well_formed_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "gf_store_superdirs:\n- /data/gf\ngf_store_dirs:\n- /data/one_store\n",
        )
        .unwrap();
        let loaded = UserConfig::load(&path).unwrap();
        assert_eq!(loaded.gf_store_superdirs, vec![PathBuf::from("/data/gf")]);
        assert_eq!(loaded.gf_store_dirs, vec![PathBuf::from("/data/one_store")]);
    }

    #[test]
    fn malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "gf_store_superdirs: 5\n").unwrap();
        let err = UserConfig::load(&path).unwrap_err();
        assert!(matches!(err, EngineError::UserConfig { .. }));
    }

    #[test]
    fn unknown_field_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "store_dirs:\n- /x\n").unwrap();
        assert!(UserConfig::load(&path).is_err());
    }
}
