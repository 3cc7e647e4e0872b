//! Configuration merging.
//!
//! Folds several `RawConfig` files into one resolved `Config`, the file closest to the
//! working directory winning for every field it sets.

use std::path::PathBuf;

use crate::{
    Config, ConfigError, KeySettings, TitleSettings,
    parse::{RawConfig, RawKeySettings, RawTitleSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single resolved `Config`.
///
/// Configs are given highest precedence first. Scalars and key lists take the first defined
/// value; messages merge per search type.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    // Lowest precedence first so closer files overwrite
    for parsed in configs.iter().rev() {
        if let Some(ref keys) = parsed.config.keys {
            apply_raw_keys(&mut config.keys, keys, parsed)?;
        }
        if let Some(ref title) = parsed.config.title {
            apply_raw_title(&mut config.title, title);
        }
        if let Some(ref messages) = parsed.config.messages {
            for (search_type, message) in messages {
                config.messages.insert(*search_type, message.clone());
            }
        }
    }

    config.config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Ok(config)
}

/// Applies raw key settings, validating the trigger.
fn apply_raw_keys(
    result: &mut KeySettings,
    raw: &RawKeySettings,
    parsed: &ParsedConfig,
) -> Result<(), ConfigError> {
    if let Some(ref trigger) = raw.facet_trigger {
        let mut chars = trigger.chars();
        result.facet_trigger = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(ConfigError::InvalidTrigger {
                    path: parsed.path.clone(),
                    value: trigger.clone(),
                });
            }
        };
    }
    if let Some(ref v) = raw.search {
        result.search = v.clone();
    }
    if let Some(ref v) = raw.next {
        result.next = v.clone();
    }
    if let Some(ref v) = raw.previous {
        result.previous = v.clone();
    }
    Ok(())
}

/// Applies raw title settings.
fn apply_raw_title(result: &mut TitleSettings, raw: &RawTitleSettings) {
    if let Some(v) = raw.truncate {
        result.truncate = v;
    }
}
