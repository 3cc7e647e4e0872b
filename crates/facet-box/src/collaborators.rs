//! Interfaces to the collaborators a search box drives but does not own.
//!
//! The surrounding application owns the dispatcher and presenter and hands them to the
//! [`SearchBox`](crate::SearchBox) at construction.

use serde::Serialize;

/// How the dispatcher is currently searching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SearchMode {
    /// An ordinary query.
    #[default]
    General,
    /// An exact lookup of specific documents.
    Specific,
    /// Documents related to a reference document.
    Related {
        /// Title of the reference document.
        title: String,
    },
}

/// Sends queries to the search backend.
///
/// At most one search is in flight; callers check [`is_outstanding`](Self::is_outstanding)
/// before dispatching.
pub trait SearchDispatcher {
    /// Starts a search for `query`.
    fn search(&mut self, query: &str);

    /// Whether a search has been dispatched and not yet completed.
    fn is_outstanding(&self) -> bool;

    /// The mode of the current or most recent search.
    fn mode(&self) -> SearchMode;
}

/// Visual state of the search area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// No search results are shown.
    Idle,
    /// Results are shown.
    Active,
    /// The last search returned nothing.
    Empty,
}

/// Receives display updates from the search box.
///
/// Only the title is required; everything else defaults to doing nothing.
pub trait Presenter {
    /// The title currently displayed above the results.
    fn title(&self) -> &str;

    /// Replaces the displayed title.
    fn set_title(&mut self, title: &str);

    /// Shows an explanation for an empty result set.
    fn show_empty_message(&mut self, _message: &str) {}

    /// Switches the visual search state.
    fn set_search_state(&mut self, _state: SearchState) {}

    /// Shows the loading indicator.
    fn show_spinner(&mut self) {}

    /// Hides the loading indicator.
    fn hide_spinner(&mut self) {}

    /// Hides pagination controls while a search runs.
    fn hide_paginator(&mut self) {}

    /// Asks the layout to be recalculated.
    fn request_layout(&mut self) {}

    /// Highlights matches for `query` in the visible documents.
    fn highlight(&mut self, _query: &str) {}
}
