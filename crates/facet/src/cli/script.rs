//! Replay scripts: one search box action per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! set project:Acme budget
//! type quarterly
//! key shift+tab
//! remove 0
//! focus account
//! select group
//! input draft text
//! complete 3
//! cancel
//! ```

use std::{fmt, str::FromStr};

use facet_box::KeyEvent;
use facet_query::Category;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Press each character of the text in turn.
    Type(String),
    /// Press a single key.
    Key(KeyEvent),
    /// Replace the whole query.
    Set(String),
    /// Replace the pending input without key handling.
    Input(String),
    /// Remove the token at an index.
    Remove(usize),
    /// Focus the first token of a category.
    Focus(Category),
    /// Pick a category as if from autocomplete.
    Select(Category),
    /// Finish the in-flight search, optionally with a result count.
    Complete(Option<usize>),
    /// Clear the query.
    Cancel,
}

/// A script line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// One-based line number.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let arg = rest.trim();
        match command {
            "type" => Ok(Self::Type(rest.to_string())),
            "key" => arg
                .parse::<KeyEvent>()
                .map(Self::Key)
                .map_err(|e| e.to_string()),
            "set" => Ok(Self::Set(rest.to_string())),
            "input" => Ok(Self::Input(rest.to_string())),
            "remove" => arg
                .parse::<usize>()
                .map(Self::Remove)
                .map_err(|_| format!("expected a token index, got '{arg}'")),
            "focus" => parse_category(arg).map(Self::Focus),
            "select" => parse_category(arg).map(Self::Select),
            "complete" if arg.is_empty() => Ok(Self::Complete(None)),
            "complete" => arg
                .parse::<usize>()
                .map(|count| Self::Complete(Some(count)))
                .map_err(|_| format!("expected a result count, got '{arg}'")),
            "cancel" => Ok(Self::Cancel),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

/// Parses a category argument.
fn parse_category(arg: &str) -> Result<Category, String> {
    arg.parse::<Category>()
        .map_err(|e| format!("{e}. {}", e.suggestion()))
}

/// Parses a whole script, skipping blank lines and `#` comments.
///
/// Returns each step with the source line it came from.
pub fn parse_script(source: &str) -> Result<Vec<(String, Step)>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            let line = line.trim_start();
            line.parse::<Step>()
                .map(|step| (line.trim_end().to_string(), step))
                .map_err(|message| ScriptError {
                    line: index + 1,
                    message,
                })
        })
        .collect()
}
