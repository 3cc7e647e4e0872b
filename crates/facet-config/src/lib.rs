//! Configuration system for the facet search box.
//!
//! Configuration lives in TOML files named `.facet.toml`. It is resolved by walking up the
//! directory tree from the current working directory, collecting every `.facet.toml` found,
//! then loading `~/.facet.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use facet_query::SearchType;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawKeySettings, RawTitleSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};

/// Merged configuration.
///
/// The fully resolved result of merging every discovered `.facet.toml`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Key bindings.
    pub keys: KeySettings,
    /// Result header settings.
    pub title: TitleSettings,
    /// Overrides for empty-result messages.
    pub messages: BTreeMap<SearchType, String>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.facet.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings in `.facet.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            keys: self.keys.clone(),
            title: self.title.clone(),
            messages: self
                .messages
                .iter()
                .map(|(t, m)| (t.as_str(), m.clone()))
                .collect(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Key bindings, by key name.
///
/// Names are validated when a keymap is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeySettings {
    /// Character that turns pending input into a facet.
    pub facet_trigger: char,
    /// Keys that submit the query.
    pub search: Vec<String>,
    /// Keys that move focus forward.
    pub next: Vec<String>,
    /// Keys that move focus backward.
    pub previous: Vec<String>,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            facet_trigger: ':',
            search: vec!["enter".into()],
            next: vec!["tab".into()],
            previous: vec!["shift+tab".into()],
        }
    }
}

/// Result header settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TitleSettings {
    /// Maximum characters of a related document title.
    pub truncate: usize,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self { truncate: 100 }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Key bindings.
    keys: KeySettings,
    /// Result header settings.
    title: TitleSettings,
    /// Message overrides by search type name, sorted.
    messages: BTreeMap<&'static str, String>,
}
