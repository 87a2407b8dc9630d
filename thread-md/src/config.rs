use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Optional settings file, every key may be overridden on the command line
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub bearer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_path_option")]
    pub image_dir: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    #[serde(default, deserialize_with = "deserialize_path_option")]
    pub outfile: Option<PathBuf>,
    pub periods: Option<bool>,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let conf_contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;
        toml::from_str(&conf_contents)
            .with_context(|| format!("Failed to parse config file {:?}", path.as_ref()))
    }

    /// Read the config file given on the command line, falling back to the
    /// default location. Only an explicitly given file is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::read(path),
                _ => Ok(Self::default()),
            },
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "Thread MD").map(|d| d.config_dir().join("config.toml"))
}

fn deserialize_path_option<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: PathBuf = Deserialize::deserialize(deserializer)?;
    expand_home(s).map(Some).map_err(D::Error::custom)
}

#[cfg(unix)]
fn expand_home(path: PathBuf) -> Result<PathBuf, String> {
    use home_dir::HomeDirExt;
    path.expand_home().map_err(|e| e.to_string())
}

#[cfg(not(unix))]
fn expand_home(path: PathBuf) -> Result<PathBuf, String> {
    Ok(path)
}
