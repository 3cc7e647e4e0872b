//! The ordered list of facet tokens being edited.

use facet_query::{Category, FacetToken, Facets, serialize};
use serde::Serialize;

/// Stable identity of a token within a [`FacetCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenId(u64);

/// A token together with its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    /// Identity of this token.
    pub id: TokenId,
    /// The token itself.
    pub token: FacetToken,
}

/// Ordered, mutable list of facet tokens.
///
/// Order is significant: it is both serialization order and tab order. Every structural
/// mutation bumps [`revision`](Self::revision), so a serialized query computed before a
/// mutation must not be reused after it.
#[derive(Debug, Clone, Default)]
pub struct FacetCollection {
    /// Tokens in display order.
    facets: Vec<Facet>,
    /// Next identity to hand out.
    next_id: u64,
    /// Mutation counter.
    revision: u64,
}

impl FacetCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with one token per present category.
    ///
    /// Faceted categories come first in their fixed priority order, followed by a text token
    /// if residual free text remains.
    pub fn render_all(&mut self, facets: &Facets) {
        self.clear();
        for token in facets.tokens() {
            self.push(token);
        }
    }

    /// Appends a token and returns its identity.
    pub fn append(&mut self, category: Category, value: &str) -> TokenId {
        self.push(FacetToken::new(category, value))
    }

    /// Appends an existing token and returns its identity.
    pub fn push(&mut self, token: FacetToken) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        self.facets.push(Facet { id, token });
        self.revision += 1;
        id
    }

    /// Removes a token by identity, returning its former index and the token.
    ///
    /// Removing a token that is not present is a no-op.
    pub fn remove(&mut self, id: TokenId) -> Option<(usize, FacetToken)> {
        let index = self.position(id)?;
        let facet = self.facets.remove(index);
        self.revision += 1;
        Some((index, facet.token))
    }

    /// Replaces the value of a token. Returns false if the token is not present.
    pub fn update(&mut self, id: TokenId, value: &str) -> bool {
        let Some(facet) = self.facets.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        facet.token.set_value(value);
        self.revision += 1;
        true
    }

    /// Removes every token.
    pub fn clear(&mut self) {
        self.facets.clear();
        self.revision += 1;
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Whether the collection holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Returns the token at an index.
    pub fn get(&self, index: usize) -> Option<&Facet> {
        self.facets.get(index)
    }

    /// Returns the index of a token.
    pub fn position(&self, id: TokenId) -> Option<usize> {
        self.facets.iter().position(|f| f.id == id)
    }

    /// Returns the index of the first token with the given category.
    pub fn find_category(&self, category: Category) -> Option<usize> {
        self.facets
            .iter()
            .position(|f| f.token.category() == category)
    }

    /// Iterates over tokens with their identities.
    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter()
    }

    /// Iterates over the tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &FacetToken> {
        self.facets.iter().map(|f| &f.token)
    }

    /// Serializes the tokens in collection order.
    pub fn serialize(&self) -> String {
        serialize(self.tokens())
    }

    /// Mutation counter, incremented on every structural change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
