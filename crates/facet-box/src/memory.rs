//! In-memory collaborators for headless drivers and tests.

use serde::Serialize;

use crate::collaborators::{Presenter, SearchDispatcher, SearchMode, SearchState};

/// Dispatcher that records queries instead of sending them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryDispatcher {
    /// Every query dispatched, in order.
    pub searches: Vec<String>,
    /// Whether a search is in flight.
    pub outstanding: bool,
    /// Mode reported to the search box.
    pub mode: SearchMode,
    /// Mark each dispatched search as outstanding until [`complete`](Self::complete).
    pub hold: bool,
}

impl MemoryDispatcher {
    /// Creates a dispatcher with no searches in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the in-flight search as finished.
    pub fn complete(&mut self) {
        self.outstanding = false;
    }
}

impl SearchDispatcher for MemoryDispatcher {
    fn search(&mut self, query: &str) {
        self.searches.push(query.to_string());
        if self.hold {
            self.outstanding = true;
        }
    }

    fn is_outstanding(&self) -> bool {
        self.outstanding
    }

    fn mode(&self) -> SearchMode {
        self.mode.clone()
    }
}

/// Presenter that keeps the latest display state in memory.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryPresenter {
    /// Displayed title.
    pub title: String,
    /// Last empty-result explanation shown.
    pub empty_message: Option<String>,
    /// Current search state.
    pub state: SearchState,
    /// Whether the spinner is visible.
    pub spinner: bool,
    /// Whether the paginator is visible.
    pub paginator: bool,
    /// Number of layout recalculations requested.
    pub layouts: usize,
    /// Last highlighted query.
    pub highlighted: Option<String>,
}

impl MemoryPresenter {
    /// Creates a presenter showing the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for MemoryPresenter {
    fn default() -> Self {
        Self {
            title: String::new(),
            empty_message: None,
            state: SearchState::Idle,
            spinner: false,
            paginator: true,
            layouts: 0,
            highlighted: None,
        }
    }
}

impl Presenter for MemoryPresenter {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_empty_message(&mut self, message: &str) {
        self.empty_message = Some(message.to_string());
    }

    fn set_search_state(&mut self, state: SearchState) {
        self.state = state;
    }

    fn show_spinner(&mut self) {
        self.spinner = true;
    }

    fn hide_spinner(&mut self) {
        self.spinner = false;
    }

    fn hide_paginator(&mut self) {
        self.paginator = false;
    }

    fn request_layout(&mut self) {
        self.layouts += 1;
    }

    fn highlight(&mut self, query: &str) {
        self.highlighted = Some(query.to_string());
    }
}
