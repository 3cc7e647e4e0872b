//! Headers displayed above search results.

use facet_query::{Category, Grammar};

use crate::inflect::{pluralize, truncate};

/// Header for the documents matched by `query` before any result count is known.
pub fn entitle(grammar: &dyn Grammar, query: &str) -> String {
    if let Some(project) = grammar.extract(Category::Project, query) {
        return project;
    }
    if let Some(group) = grammar.extract(Category::Group, query) {
        return format!("{group} Documents");
    }
    if let Some(account) = grammar.extract(Category::Account, query) {
        return format!("{account}'s Documents");
    }
    let filter = grammar
        .extract(Category::Filter, query)
        .map(|f| f.to_ascii_lowercase());
    match filter.as_deref() {
        Some("published") => "Published Documents".to_string(),
        Some("annotated") => "Annotated Documents".to_string(),
        _ => "All Documents".to_string(),
    }
}

/// Header for documents related to a reference document.
pub fn related_title(count: usize, document_title: &str, max: usize) -> String {
    format!(
        "{count} {} Related to \"{}\"",
        pluralize("Document", count),
        truncate(document_title, max)
    )
}

/// Header for an exact lookup.
pub fn specific_title(count: usize) -> String {
    format!("{count} {}", pluralize("Document", count))
}

/// Header for a free-text search within the scope named by `scope`.
///
/// The scope is wrapped in typographic quotes when it names a project.
pub fn search_title(count: usize, scope: &str, quote: bool) -> String {
    let prefix = if count > 0 {
        format!("{count} {}", pluralize("Result", count))
    } else {
        "No Results".to_string()
    };
    if quote {
        format!("{prefix} in \u{201c}{scope}\u{201d}")
    } else {
        format!("{prefix} in {scope}")
    }
}
