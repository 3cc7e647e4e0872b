//! Error types for facet categories.
//!
//! Query extraction itself never fails; the only fallible operation in this crate is naming a
//! category from user-supplied text.

use thiserror::Error;

/// Errors raised when converting text into a [`Category`](crate::Category).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The name does not match any known category.
    #[error("unknown facet category: {0}")]
    Unknown(String),
}

impl CategoryError {
    /// Returns a suggestion listing the valid category names.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "Valid categories are: project, text, account, group, filter, document",
        }
    }
}
