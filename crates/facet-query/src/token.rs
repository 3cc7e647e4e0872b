//! Facet tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One typed fragment of a query: a category and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetToken {
    /// The category of this fragment.
    category: Category,
    /// The trimmed value.
    value: String,
}

impl FacetToken {
    /// Creates a token, trimming surrounding whitespace from the value.
    pub fn new(category: Category, value: impl AsRef<str>) -> Self {
        Self {
            category,
            value: value.as_ref().trim().to_string(),
        }
    }

    /// Creates a free-text token.
    pub fn text(value: impl AsRef<str>) -> Self {
        Self::new(Category::Text, value)
    }

    /// Returns the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the trimmed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value, trimming it.
    pub fn set_value(&mut self, value: impl AsRef<str>) {
        self.value = value.as_ref().trim().to_string();
    }

    /// Whether the token carries no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Serializes the token into query syntax.
    ///
    /// Free text is written bare. Other categories are written as `category:value`, quoting
    /// values that contain whitespace so a grammar reads them back as one value. An empty token
    /// serializes to the empty string.
    pub fn serialize(&self) -> String {
        if self.value.is_empty() {
            return String::new();
        }
        if !self.category.is_prefixed() {
            return self.value.clone();
        }
        format!("{}:{}", self.category, quote_value(&self.value))
    }
}

impl fmt::Display for FacetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Quotes a facet value when a bare rendering would not read back as the same value.
///
/// Values containing whitespace or starting with a quote character are quoted. Double quotes
/// are preferred; single quotes are used when the value holds a double quote but no single
/// quote. Backslashes and the chosen quote character are escaped.
fn quote_value(value: &str) -> String {
    let needs_quotes =
        value.starts_with(['"', '\'']) || value.chars().any(char::is_whitespace);
    if !needs_quotes {
        return value.to_string();
    }
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        if ch == quote || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(quote);
    out
}
