//! Facet categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CategoryError;

/// The category of a facet token.
///
/// `Text` is the implicit category of free text that no prefix claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A project the documents belong to.
    Project,
    /// Free text.
    Text,
    /// The account that owns the documents.
    Account,
    /// The organization (group) that owns the documents.
    Group,
    /// A named filter such as `published` or `annotated`.
    Filter,
    /// A reference document, used for related-document searches.
    Document,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Project,
        Self::Text,
        Self::Account,
        Self::Group,
        Self::Filter,
        Self::Document,
    ];

    /// Categories extracted from a query as structured facets.
    ///
    /// The order is fixed: it decides both rendering order and tab order.
    pub const FACETED: [Self; 4] = [Self::Project, Self::Account, Self::Group, Self::Filter];

    /// Prefixes offered to an autocomplete widget.
    pub const SUGGESTED: [Self; 5] = [
        Self::Project,
        Self::Text,
        Self::Account,
        Self::Document,
        Self::Filter,
    ];

    /// Returns the prefix name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Text => "text",
            Self::Account => "account",
            Self::Group => "group",
            Self::Filter => "filter",
            Self::Document => "document",
        }
    }

    /// Whether this category is written with a `name:` prefix when serialized.
    pub fn is_prefixed(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CategoryError::Unknown(name.to_string()))
    }
}
