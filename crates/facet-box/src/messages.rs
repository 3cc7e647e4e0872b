//! Explanations shown when a search returns no results.

use facet_query::SearchType;

/// One empty-result message per search type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMessages {
    /// Project-only query.
    pub project: String,
    /// Account-only query.
    pub account: String,
    /// Group-only query.
    pub group: String,
    /// `published` filter.
    pub published: String,
    /// `annotated` filter.
    pub annotated: String,
    /// Free-text search.
    pub search: String,
    /// Unconstrained query.
    pub all: String,
    /// Related-document search.
    pub related: String,
}

impl EmptyMessages {
    /// Returns the message for a search type.
    pub fn get(&self, search_type: SearchType) -> &str {
        match search_type {
            SearchType::Project => &self.project,
            SearchType::Account => &self.account,
            SearchType::Group => &self.group,
            SearchType::Published => &self.published,
            SearchType::Annotated => &self.annotated,
            SearchType::Search => &self.search,
            SearchType::All => &self.all,
            SearchType::Related => &self.related,
        }
    }

    /// Replaces the message for a search type.
    pub fn set(&mut self, search_type: SearchType, message: impl Into<String>) {
        let slot = match search_type {
            SearchType::Project => &mut self.project,
            SearchType::Account => &mut self.account,
            SearchType::Group => &mut self.group,
            SearchType::Published => &mut self.published,
            SearchType::Annotated => &mut self.annotated,
            SearchType::Search => &mut self.search,
            SearchType::All => &mut self.all,
            SearchType::Related => &mut self.related,
        };
        *slot = message.into();
    }
}

impl Default for EmptyMessages {
    fn default() -> Self {
        Self {
            project: "This project does not contain any documents.".into(),
            account: "This account does not have any documents.".into(),
            group: "This organization does not have any documents.".into(),
            published: "This account does not have any published documents.".into(),
            annotated: "There are no annotated documents.".into(),
            search: "Your search did not match any documents.".into(),
            all: "There are no documents.".into(),
            related: "There are no documents related to this document.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_distinct_message() {
        let messages = EmptyMessages::default();
        let mut seen: Vec<_> = SearchType::ALL.iter().map(|t| messages.get(*t)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SearchType::ALL.len());
    }

    #[test]
    fn set_overrides_one_type() {
        let mut messages = EmptyMessages::default();
        messages.set(SearchType::All, "Nothing here yet.");
        assert_eq!(messages.get(SearchType::All), "Nothing here yet.");
        assert_eq!(
            messages.get(SearchType::Search),
            "Your search did not match any documents."
        );
    }
}
