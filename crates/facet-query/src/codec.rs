//! Query codec.
//!
//! Converts between raw query strings and ordered facet tokens. Category recognition is
//! delegated to a [`Grammar`]; the codec only orchestrates extraction, removal and
//! serialization.

use serde::Serialize;
use tracing::debug;

use crate::{
    category::Category,
    grammar::{Entity, Grammar},
    token::FacetToken,
};

/// Facets found in a query, one optional value per faceted category plus residual text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Project name.
    pub project: Option<String>,
    /// Account slug.
    pub account: Option<String>,
    /// Group name.
    pub group: Option<String>,
    /// Filter name.
    pub filter: Option<String>,
    /// Free text left after removing every faceted fragment.
    pub text: Option<String>,
    /// Named entities found in the query.
    pub entities: Vec<Entity>,
}

impl Facets {
    /// Returns the value extracted for a category.
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Project => self.project.as_deref(),
            Category::Account => self.account.as_deref(),
            Category::Group => self.group.as_deref(),
            Category::Filter => self.filter.as_deref(),
            Category::Text => self.text.as_deref(),
            Category::Document => None,
        }
    }

    /// Returns a mutable slot for a category, or `None` for categories that are not extracted.
    fn slot(&mut self, category: Category) -> Option<&mut Option<String>> {
        match category {
            Category::Project => Some(&mut self.project),
            Category::Account => Some(&mut self.account),
            Category::Group => Some(&mut self.group),
            Category::Filter => Some(&mut self.filter),
            Category::Text => Some(&mut self.text),
            Category::Document => None,
        }
    }

    /// Tokens for the faceted categories only, in priority order.
    pub fn faceted_tokens(&self) -> Vec<FacetToken> {
        Category::FACETED
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| FacetToken::new(c, v)))
            .collect()
    }

    /// All tokens: faceted categories in priority order, then residual text.
    pub fn tokens(&self) -> Vec<FacetToken> {
        let mut tokens = self.faceted_tokens();
        if let Some(text) = &self.text {
            tokens.push(FacetToken::text(text));
        }
        tokens
    }

    /// Whether no facet and no text was found.
    pub fn is_empty(&self) -> bool {
        Category::FACETED
            .into_iter()
            .chain([Category::Text])
            .all(|c| self.get(c).is_none())
    }
}

/// Extracts the facets of a raw query.
///
/// Never fails: categories the grammar does not find are simply absent.
pub fn extract_facets(grammar: &dyn Grammar, query: &str) -> Facets {
    let mut facets = Facets::default();

    for category in Category::FACETED {
        let value = grammar
            .extract(category, query)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(slot) = facets.slot(category) {
            *slot = value;
        }
    }

    let residual = pare_query(grammar, query);
    facets.text = (!residual.is_empty()).then_some(residual);

    facets.entities = grammar.entities(query);
    if !facets.entities.is_empty() {
        debug!(entities = ?facets.entities, "ignoring query entities");
    }

    facets
}

/// Removes every faceted fragment from `query` and trims the remainder.
pub fn pare_query(grammar: &dyn Grammar, query: &str) -> String {
    Category::FACETED
        .into_iter()
        .fold(query.to_string(), |q, c| grammar.remove(c, &q))
        .trim()
        .to_string()
}

/// Serializes tokens into a query string, preserving order.
///
/// Tokens are separated by a single space; empty tokens are skipped.
pub fn serialize<'a>(tokens: impl IntoIterator<Item = &'a FacetToken>) -> String {
    tokens
        .into_iter()
        .map(FacetToken::serialize)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a query into tokens: faceted categories in priority order, then residual text.
pub fn parse(grammar: &dyn Grammar, query: &str) -> Vec<FacetToken> {
    extract_facets(grammar, query).tokens()
}
