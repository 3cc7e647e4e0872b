//! Configuration file parsing.
//!
//! Parses individual `.facet.toml` files into `RawConfig` structures that keep every field
//! optional until merging.

use std::{collections::HashMap, fs, path::Path};

use facet_query::SearchType;
use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Key bindings.
    pub keys: Option<RawKeySettings>,
    /// Result header settings.
    pub title: Option<RawTitleSettings>,
    /// Empty-result messages keyed by search type.
    pub messages: Option<HashMap<SearchType, String>>,
}

/// Raw key bindings.
///
/// Each binding accepts either a single key name or an array of names.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawKeySettings {
    /// Character that turns pending input into a facet.
    pub facet_trigger: Option<String>,
    /// Keys that submit the query.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub search: Option<Vec<String>>,
    /// Keys that move focus forward.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub next: Option<Vec<String>>,
    /// Keys that move focus backward.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub previous: Option<Vec<String>>,
}

/// Raw result header settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTitleSettings {
    /// Maximum characters of a related document title.
    pub truncate: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
