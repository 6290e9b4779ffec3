//! Reading and writing configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::Value;

use temblor_core::paths::HasPaths;

use crate::config::Config;
use crate::error::ConfigError;

/// Tag marking a document's top level as a configuration.
pub const CONFIG_TAG: &str = "temblor.Config";

/// Load a configuration from `path`.
///
/// The document's top level must be a mapping tagged `!temblor.Config`;
/// anything else is [`ConfigError::NotAConfig`]. On success the tree is
/// anchored at the file's directory and validated.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tagged = match value {
        Value::Tagged(tagged) => tagged,
        _ => {
            return Err(ConfigError::NotAConfig {
                path: path.to_path_buf(),
                detail: "document is not tagged".to_string(),
            })
        }
    };
    if tagged.tag != CONFIG_TAG {
        return Err(ConfigError::NotAConfig {
            path: path.to_path_buf(),
            detail: format!("unexpected tag '{}'", tagged.tag),
        });
    }
    if !tagged.value.is_mapping() {
        return Err(ConfigError::NotAConfig {
            path: path.to_path_buf(),
            detail: "tagged value is not a mapping".to_string(),
        });
    }

    let mut config: Config =
        serde_yaml::from_value(tagged.value).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.set_basepath(&basepath_for(path));
    config.validate()?;
    Ok(config)
}

/// Write a configuration to `path`, tagged `!temblor.Config`.
///
/// Relative paths are rewritten so they stay valid from the file's
/// directory: the tree is transiently re-anchored there for
/// serialization, and the caller's base directory is restored before
/// returning, on failure too.
pub fn write_config(config: &mut Config, path: &Path) -> Result<(), ConfigError> {
    let target_dir = basepath_for(path);
    let mut guard = BasepathGuard::new(config);
    guard.config.change_basepath(&target_dir);

    let value = serde_yaml::to_value(&*guard.config)
        .map_err(|source| ConfigError::Serialize { source })?;
    let doc = Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(CONFIG_TAG),
        value,
    }));
    let text =
        serde_yaml::to_string(&doc).map_err(|source| ConfigError::Serialize { source })?;
    fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// The base directory a configuration at `path` resolves against.
fn basepath_for(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Restores a configuration's base directory when dropped.
struct BasepathGuard<'a> {
    config: &'a mut Config,
    original: Option<PathBuf>,
}

impl<'a> BasepathGuard<'a> {
    fn new(config: &'a mut Config) -> Self {
        let original = config.get_basepath().map(Path::to_path_buf);
        Self { config, original }
    }
}

impl Drop for BasepathGuard<'_> {
    fn drop(&mut self) {
        match self.original.take() {
            Some(original) => self.config.change_basepath(&original),
            None => self.config.clear_basepath(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basepath_for_uses_the_parent_directory() {
        assert_eq!(
            basepath_for(Path::new("/project/config.yaml")),
            PathBuf::from("/project")
        );
        assert_eq!(
            basepath_for(Path::new("sub/config.yaml")),
            PathBuf::from("sub")
        );
    }

    #[test]
    fn basepath_for_bare_filename_is_the_current_directory() {
        assert_eq!(basepath_for(Path::new("config.yaml")), PathBuf::from("."));
    }
}
