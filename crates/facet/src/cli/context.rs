//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use facet_box::{BoxAction, BoxSettings, EmptyMessages, KeyCode, KeyEvent, KeyParseError, Keymap};
use facet_config::{Config, KeySettings};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds the keymap described by the configuration.
    pub fn keymap(&self) -> Result<Keymap, ExitCode> {
        build_keymap(&self.config.keys).map_err(|e| {
            eprintln!("error: invalid key binding in configuration: {e}");
            ExitCode::FAILURE
        })
    }

    /// Search box settings with configured overrides applied.
    pub fn box_settings(&self) -> BoxSettings {
        BoxSettings {
            title_truncate: self.config.title.truncate,
            messages: self.empty_messages(),
        }
    }

    /// Default empty-result messages with configured overrides applied.
    pub fn empty_messages(&self) -> EmptyMessages {
        let mut messages = EmptyMessages::default();
        for (search_type, message) in &self.config.messages {
            messages.set(*search_type, message.as_str());
        }
        messages
    }
}

/// Binds every configured key name to its action.
pub fn build_keymap(keys: &KeySettings) -> Result<Keymap, KeyParseError> {
    let mut keymap = Keymap::empty();
    keymap.bind(
        KeyEvent::new(KeyCode::Char(keys.facet_trigger)),
        BoxAction::AddFacet,
    );
    let groups = [
        (&keys.search, BoxAction::Search),
        (&keys.next, BoxAction::FocusNext),
        (&keys.previous, BoxAction::FocusPrevious),
    ];
    for (names, action) in groups {
        for name in names {
            keymap.bind(name.parse()?, action);
        }
    }
    Ok(keymap)
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
