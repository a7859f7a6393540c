//! Configuration loading using figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.json` in the config directory
//! 3. Environment variables with the `TASKBOARD_` prefix
//! 4. Command line flags

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Environment variable prefix, e.g. `TASKBOARD_DATA_DIR`
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Base name of the config files
const CONFIG_FILE_STEM: &str = "taskboard";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Figment(#[from] figment::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings the CLI runs with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where state and the activity log are stored
    pub data_dir: PathBuf,
    /// Name recorded with each change
    #[serde(default)]
    pub actor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            actor: None,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

/// `<platform data dir>/taskboard`, falling back to `./taskboard`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_STEM)
}

/// `<platform config dir>/taskboard`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_STEM))
}

/// Builds a [`Config`] from every source
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader reading config files from the platform config directory
    pub fn new() -> Self {
        Self {
            config_dir: default_config_dir(),
        }
    }

    /// Loader reading config files from `dir`
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
        }
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Merge all sources, with `overrides` on top
    pub fn load(&self, overrides: &CliOverrides) -> ConfigResult<Config> {
        let config: Config = self
            .figment()
            .merge(Serialized::defaults(overrides))
            .extract()?;
        debug!(data_dir = %config.data_dir.display(), actor = ?config.actor, "loaded configuration");
        Ok(config)
    }

    fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(dir) = &self.config_dir {
            for (name, provider) in [
                ("toml", Figment::from(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))),
                ("yaml", Figment::from(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))),
                ("json", Figment::from(Json::file(dir.join(format!("{CONFIG_FILE_STEM}.json"))))),
            ] {
                trace!(dir = %dir.display(), format = name, "adding config file source");
                figment = figment.merge(provider);
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
