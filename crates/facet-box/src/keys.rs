//! Key events and the keymap that turns them into search box actions.

use std::{collections::HashMap, fmt, str::FromStr};

use thiserror::Error;

/// A physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Return / Enter.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// A printable character.
    Char(char),
}

/// A key press with its shift state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key pressed.
    pub code: KeyCode,
    /// Whether shift was held.
    pub shift: bool,
}

impl KeyEvent {
    /// A key press without shift.
    pub fn new(code: KeyCode) -> Self {
        Self { code, shift: false }
    }

    /// A key press with shift held.
    pub fn shifted(code: KeyCode) -> Self {
        Self { code, shift: true }
    }
}

/// Errors raised when parsing a key description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The description was empty.
    #[error("empty key description")]
    Empty,
    /// The key name is not recognized.
    #[error("unknown key: {0}")]
    Unknown(String),
}

impl FromStr for KeyEvent {
    type Err = KeyParseError;

    /// Parses descriptions like `enter`, `tab`, `shift+tab`, `space` or a single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let (shift, name) = match s.split_once('+') {
            Some((modifier, rest)) if modifier.eq_ignore_ascii_case("shift") && !rest.is_empty() => {
                (true, rest)
            }
            _ => (false, s),
        };

        let mut chars = name.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(ch), None) => KeyCode::Char(ch),
            _ => match name.to_ascii_lowercase().as_str() {
                "enter" | "return" => KeyCode::Enter,
                "tab" => KeyCode::Tab,
                "esc" | "escape" => KeyCode::Escape,
                "backspace" => KeyCode::Backspace,
                "space" => KeyCode::Char(' '),
                _ => return Err(KeyParseError::Unknown(s.to_string())),
            },
        };

        Ok(Self { code, shift })
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Escape => f.write_str("escape"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(ch) => write!(f, "{ch}"),
        }
    }
}

/// What a bound key asks the search box to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxAction {
    /// Submit the current query.
    Search,
    /// Turn the pending input into a facet.
    AddFacet,
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrevious,
}

/// Resolves key events to search box actions.
#[derive(Debug, Clone)]
pub struct Keymap {
    /// Bound keys.
    bindings: HashMap<KeyEvent, BoxAction>,
}

impl Keymap {
    /// The default facet trigger character.
    pub const DEFAULT_FACET_TRIGGER: char = ':';

    /// Creates a keymap with nothing bound.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates a keymap with the default bindings.
    pub fn default_bindings() -> Self {
        Self::with_facet_trigger(Self::DEFAULT_FACET_TRIGGER)
    }

    /// Creates the default bindings with a custom facet trigger character.
    pub fn with_facet_trigger(trigger: char) -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(KeyEvent::new(KeyCode::Enter), BoxAction::Search);
        bindings.insert(KeyEvent::new(KeyCode::Tab), BoxAction::FocusNext);
        bindings.insert(KeyEvent::shifted(KeyCode::Tab), BoxAction::FocusPrevious);
        bindings.insert(KeyEvent::new(KeyCode::Char(trigger)), BoxAction::AddFacet);
        Self { bindings }
    }

    /// Binds a key, replacing any previous binding.
    pub fn bind(&mut self, event: KeyEvent, action: BoxAction) {
        self.bindings.insert(event, action);
    }

    /// Resolves a key event.
    ///
    /// Characters match regardless of shift, since many trigger characters need it.
    pub fn resolve(&self, event: &KeyEvent) -> Option<BoxAction> {
        if let Some(action) = self.bindings.get(event) {
            return Some(*action);
        }
        match event.code {
            KeyCode::Char(_) if event.shift => self.bindings.get(&KeyEvent::new(event.code)).copied(),
            _ => None,
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::default_bindings()
    }
}
