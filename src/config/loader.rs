use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::StoreConfig;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".navmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// Pure function to read a config file's contents.
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse a TOML config string. Does not validate.
pub fn parse_config(contents: &str) -> Result<StoreConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load and validate a config file from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<StoreConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(reason) = config.validate() {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        });
    }
    Ok(config)
}

/// Try one candidate path; unusable files log a warning and keep the
/// ancestor walk going.
fn try_load_config_from_path(path: &Path) -> Option<StoreConfig> {
    match load_config_from_path(path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(ConfigError::Io { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            None
        }
        Err(err) => {
            log::warn!("{err}. Using defaults.");
            None
        }
    }
}

/// Directory ancestors of `start`, nearest first, capped at `max_depth`.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Locate and load the store configuration.
///
/// Walks from the working directory upward looking for `.navmap.toml`,
/// falls back to defaults when none is usable, then applies `NAVMAP_*`
/// environment overrides. Never fails.
pub fn load_config() -> StoreConfig {
    let mut config = match std::env::current_dir() {
        Ok(dir) => directory_ancestors(dir, MAX_TRAVERSAL_DEPTH)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find_map(|path| try_load_config_from_path(&path))
            .unwrap_or_else(|| {
                log::debug!("No {CONFIG_FILE_NAME} found. Using default config.");
                StoreConfig::default()
            }),
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            StoreConfig::default()
        }
    };
    config.apply_env_overrides();
    config
}
