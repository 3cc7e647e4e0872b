//! Facet grammar.
//!
//! The codec never inspects query syntax itself. It asks a [`Grammar`] where each category
//! appears in a query and how to cut it out. [`PrefixGrammar`] is the default implementation
//! for `category:value` syntax.

use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    lexer::{PrefixMatch, scan},
};

/// Broad classification of a query, used to pick an empty-result explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Only a project facet.
    Project,
    /// Only an account facet.
    Account,
    /// Only a group facet.
    Group,
    /// The `published` filter.
    Published,
    /// The `annotated` filter.
    Annotated,
    /// Free text is present.
    Search,
    /// Nothing constrains the query.
    All,
    /// Documents related to a reference document.
    Related,
}

impl SearchType {
    /// Every search type.
    pub const ALL: [Self; 8] = [
        Self::Project,
        Self::Account,
        Self::Group,
        Self::Published,
        Self::Annotated,
        Self::Search,
        Self::All,
        Self::Related,
    ];

    /// Returns the lowercase name of this search type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Account => "account",
            Self::Group => "group",
            Self::Published => "published",
            Self::Annotated => "annotated",
            Self::Search => "search",
            Self::All => "all",
            Self::Related => "related",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity recognized in a query (for example `person:Smith`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind, lowercased.
    pub kind: String,
    /// Entity value.
    pub value: String,
}

/// Recognizes facet categories inside a raw query string.
pub trait Grammar {
    /// Returns the first value for `category`, or `None` if the category is absent.
    fn extract(&self, category: Category, query: &str) -> Option<String>;

    /// Returns `query` with every occurrence of `category` removed.
    fn remove(&self, category: Category, query: &str) -> String;

    /// Classifies the query as a whole.
    fn search_type(&self, query: &str) -> SearchType;

    /// Returns the named entities in the query.
    fn entities(&self, query: &str) -> Vec<Entity>;
}

/// Grammar for `category:value` and `category:"quoted value"` syntax.
///
/// Category names match case-insensitively. `text` is never a prefix: free text is whatever
/// is left once the prefixed fragments are removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixGrammar;

impl PrefixGrammar {
    /// Creates the grammar.
    pub fn new() -> Self {
        Self
    }

    /// Returns the fragments of `query` that belong to `category`.
    fn matches(category: Category, query: &str) -> Vec<PrefixMatch> {
        if !category.is_prefixed() {
            return Vec::new();
        }
        scan(query)
            .into_iter()
            .filter(|m| m.name.eq_ignore_ascii_case(category.as_str()))
            .collect()
    }
}

impl Grammar for PrefixGrammar {
    fn extract(&self, category: Category, query: &str) -> Option<String> {
        Self::matches(category, query)
            .into_iter()
            .next()
            .map(|m| m.value.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn remove(&self, category: Category, query: &str) -> String {
        let spans: Vec<_> = Self::matches(category, query)
            .into_iter()
            .map(|m| m.span)
            .collect();
        cut_spans(query, &spans)
    }

    fn search_type(&self, query: &str) -> SearchType {
        let residual = Category::FACETED
            .into_iter()
            .chain([Category::Document])
            .fold(query.to_string(), |q, c| self.remove(c, &q));

        if !residual.trim().is_empty() {
            return SearchType::Search;
        }
        if self.extract(Category::Document, query).is_some() {
            return SearchType::Related;
        }

        let filter = self
            .extract(Category::Filter, query)
            .map(|f| f.to_ascii_lowercase());
        match filter.as_deref() {
            Some("published") => return SearchType::Published,
            Some("annotated") => return SearchType::Annotated,
            _ => {}
        }

        if self.extract(Category::Project, query).is_some() {
            SearchType::Project
        } else if self.extract(Category::Group, query).is_some() {
            SearchType::Group
        } else if self.extract(Category::Account, query).is_some() {
            SearchType::Account
        } else {
            SearchType::All
        }
    }

    fn entities(&self, query: &str) -> Vec<Entity> {
        scan(query)
            .into_iter()
            .filter(|m| m.name.parse::<Category>().is_err() && !m.value.trim().is_empty())
            .map(|m| Entity {
                kind: m.name.to_lowercase(),
                value: m.value.trim().to_string(),
            })
            .collect()
    }
}

/// Removes the given byte spans from `query`, each with one trailing whitespace character.
fn cut_spans(query: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(query.len());
    let mut cursor = 0;

    for span in spans {
        out.push_str(&query[cursor..span.start]);
        cursor = span.end;
        if let Some(ch) = query[cursor..].chars().next()
            && ch.is_whitespace()
        {
            cursor += ch.len_utf8();
        }
    }

    out.push_str(&query[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_first_occurrence() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.extract(Category::Project, "project:one project:two"),
            Some("one".into())
        );
        assert_eq!(g.extract(Category::Account, "project:one"), None);
    }

    #[test]
    fn extract_is_case_insensitive() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.extract(Category::Group, "GROUP:newsroom"),
            Some("newsroom".into())
        );
    }

    #[test]
    fn extract_ignores_empty_values() {
        let g = PrefixGrammar::new();
        assert_eq!(g.extract(Category::Project, "project: "), None);
    }

    #[test]
    fn text_is_never_a_prefix() {
        let g = PrefixGrammar::new();
        assert_eq!(g.extract(Category::Text, "text:hello"), None);
        assert_eq!(g.remove(Category::Text, "text:hello"), "text:hello");
    }

    #[test]
    fn remove_every_occurrence() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.remove(Category::Project, "project:a foo project:\"b c\" bar"),
            "foo bar"
        );
    }

    #[test]
    fn remove_leaves_other_categories() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.remove(Category::Account, "account:jdoe group:desk"),
            "group:desk"
        );
    }

    #[test]
    fn search_type_classification() {
        let g = PrefixGrammar::new();
        assert_eq!(g.search_type(""), SearchType::All);
        assert_eq!(g.search_type("project:Acme"), SearchType::Project);
        assert_eq!(g.search_type("account:jdoe"), SearchType::Account);
        assert_eq!(g.search_type("group:desk"), SearchType::Group);
        assert_eq!(g.search_type("filter:published"), SearchType::Published);
        assert_eq!(g.search_type("filter:Annotated"), SearchType::Annotated);
        assert_eq!(g.search_type("document:42-report"), SearchType::Related);
        assert_eq!(g.search_type("project:Acme budget"), SearchType::Search);
    }

    #[test]
    fn project_outranks_account_and_group() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.search_type("account:jdoe project:Acme group:desk"),
            SearchType::Project
        );
    }

    #[test]
    fn entities_skip_categories() {
        let g = PrefixGrammar::new();
        assert_eq!(
            g.entities("project:Acme Person:Smith city:\"New York\""),
            vec![
                Entity {
                    kind: "person".into(),
                    value: "Smith".into()
                },
                Entity {
                    kind: "city".into(),
                    value: "New York".into()
                },
            ]
        );
    }

    #[test]
    fn search_type_names() {
        let names: Vec<_> = SearchType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            [
                "project",
                "account",
                "group",
                "published",
                "annotated",
                "search",
                "all",
                "related"
            ]
        );
    }
}
