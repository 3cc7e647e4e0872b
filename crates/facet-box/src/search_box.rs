//! The search box controller.
//!
//! Ties the codec, the facet collection and the focus navigator together, reacts to key
//! events, and reports search lifecycle changes to the injected collaborators. Nothing here
//! fails: unexpected input degrades to a no-op or a default.

use std::mem;

use facet_query::{Category, FacetToken, Grammar, SearchType, extract_facets, pare_query};
use tracing::debug;

use crate::{
    collaborators::{Presenter, SearchDispatcher, SearchMode, SearchState},
    collection::{Facet, FacetCollection, TokenId},
    focus::{Direction, Focus, FocusNavigator},
    keys::{BoxAction, KeyCode, KeyEvent, Keymap},
    messages::EmptyMessages,
    title::{entitle, related_title, search_title, specific_title},
};

/// Tunables for a search box.
#[derive(Debug, Clone)]
pub struct BoxSettings {
    /// Maximum characters of a related document title shown in the header.
    pub title_truncate: usize,
    /// Empty-result explanations.
    pub messages: EmptyMessages,
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            title_truncate: 100,
            messages: EmptyMessages::default(),
        }
    }
}

/// What the caller should do with a key after the search box saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed; suppress its default behaviour.
    Handled,
    /// Not ours; apply the default behaviour.
    PassThrough,
}

/// Controller for a faceted search input.
pub struct SearchBox<G, D, P> {
    /// Recognizes facets in query strings.
    grammar: G,
    /// Sends searches to the backend.
    dispatcher: D,
    /// Receives display updates.
    presenter: P,
    /// Key bindings.
    keymap: Keymap,
    /// Tunables.
    settings: BoxSettings,
    /// Tokens being edited.
    facets: FacetCollection,
    /// Edit focus.
    focus: FocusNavigator,
    /// Raw content of the trailing free-text input.
    input: String,
    /// Untrimmed edit buffer of the focused token.
    draft: String,
}

impl<G, D, P> SearchBox<G, D, P>
where
    G: Grammar,
    D: SearchDispatcher,
    P: Presenter,
{
    /// Creates an empty search box.
    pub fn new(grammar: G, dispatcher: D, presenter: P, keymap: Keymap, settings: BoxSettings) -> Self {
        Self {
            grammar,
            dispatcher,
            presenter,
            keymap,
            settings,
            facets: FacetCollection::new(),
            focus: FocusNavigator::new(),
            input: String::new(),
            draft: String::new(),
        }
    }

    /// The composed query.
    pub fn value(&self) -> String {
        self.get_query()
    }

    /// Replaces the whole query, rebuilding the tokens from it.
    ///
    /// Recognized facets become tokens in priority order; any residual free text becomes an
    /// explicit trailing text token rather than staying in the input.
    pub fn set_value(&mut self, query: &str) {
        let mut facets = extract_facets(&self.grammar, query);
        facets.text = None;
        self.facets.render_all(&facets);

        let residual = pare_query(&self.grammar, query);
        if !residual.is_empty() {
            self.facets.append(Category::Text, &residual);
        }

        self.input.clear();
        self.focus.reset();
        self.sync_draft();
        debug!(query = %query, tokens = self.facets.len(), "query set");
    }

    /// Serialized tokens followed by whatever is pending in the input.
    pub fn get_query(&self) -> String {
        let serialized = self.facets.serialize();
        if self.input.trim().is_empty() {
            serialized
        } else if serialized.is_empty() {
            self.input.clone()
        } else {
            format!("{serialized} {}", self.input)
        }
    }

    /// Appends a token and focuses it for editing. Clears the input.
    pub fn add_facet(&mut self, category: Category, initial: &str) -> TokenId {
        let id = self.facets.append(category, initial);
        self.focus.focus_token(&self.facets, self.facets.len() - 1);
        self.input.clear();
        self.sync_draft();
        id
    }

    /// Removes a token. Unknown tokens are ignored.
    pub fn remove_facet(&mut self, id: TokenId) {
        if let Some((index, token)) = self.facets.remove(id) {
            debug!(index, token = %token, "facet removed");
            self.focus.on_removed(index);
            self.sync_draft();
        }
    }

    /// Commits a new value for a token. Returns false if the token is not present.
    pub fn update_facet(&mut self, id: TokenId, value: &str) -> bool {
        let updated = self.facets.update(id, value);
        if updated && self.focused_facet().is_some_and(|f| f.id == id) {
            self.draft = value.to_string();
        }
        updated
    }

    /// Handles a category picked from autocomplete: adds an empty token of that category and
    /// focuses the first token of the category.
    pub fn select_category(&mut self, category: Category) {
        self.input.clear();
        self.facets.append(category, "");
        self.focus.focus_category(&self.facets, category);
        self.sync_draft();
    }

    /// Replaces the pending input.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Pending input not yet committed to a token.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Inserts typed text into whatever has focus.
    pub fn insert_text(&mut self, text: &str) {
        match self.focused_facet().map(|f| f.id) {
            Some(id) => {
                let mut draft = mem::take(&mut self.draft);
                draft.push_str(text);
                self.facets.update(id, &draft);
                self.draft = draft;
            }
            None => self.input.push_str(text),
        }
    }

    /// Deletes the last character of whatever has focus.
    pub fn delete_backward(&mut self) {
        match self.focused_facet().map(|f| f.id) {
            Some(id) => {
                let mut draft = mem::take(&mut self.draft);
                draft.pop();
                self.facets.update(id, &draft);
                self.draft = draft;
            }
            None => {
                self.input.pop();
            }
        }
    }

    /// Applies the search box key policy.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let action = self.keymap.resolve(&event);
        debug!(key = %event, ?action, focus = ?self.focus.focus(), "key");

        match action {
            Some(BoxAction::Search) => {
                if self.dispatcher.is_outstanding() {
                    debug!("search outstanding, ignoring");
                    return KeyOutcome::PassThrough;
                }
                self.search_event();
                KeyOutcome::Handled
            }
            Some(BoxAction::AddFacet) => {
                if self.focus.focus() != Focus::Input {
                    return KeyOutcome::PassThrough;
                }
                self.commit_input_as_facet();
                KeyOutcome::Handled
            }
            Some(BoxAction::FocusNext) => {
                self.focus.advance(&self.facets, Direction::Forward);
                self.sync_draft();
                KeyOutcome::Handled
            }
            Some(BoxAction::FocusPrevious) => {
                self.focus.advance(&self.facets, Direction::Backward);
                self.sync_draft();
                KeyOutcome::Handled
            }
            None => KeyOutcome::PassThrough,
        }
    }

    /// Handles a key and applies the default behaviour for typing keys it passes through.
    pub fn press(&mut self, event: KeyEvent) -> KeyOutcome {
        let outcome = self.handle_key(event);
        if outcome == KeyOutcome::PassThrough {
            match event.code {
                KeyCode::Char(ch) => self.insert_text(ch.encode_utf8(&mut [0; 4])),
                KeyCode::Backspace => self.delete_backward(),
                KeyCode::Enter | KeyCode::Tab | KeyCode::Escape => {}
            }
        }
        outcome
    }

    /// Dispatches the current query unless a search is outstanding or the query is empty.
    ///
    /// Returns true if a search was dispatched.
    pub fn search_event(&mut self) -> bool {
        if self.dispatcher.is_outstanding() {
            debug!("search outstanding, not dispatching");
            return false;
        }
        let query = self.value();
        if query.is_empty() {
            return false;
        }
        debug!(query = %query, "dispatching search");
        self.dispatcher.search(&query);
        true
    }

    /// Clears the whole query.
    pub fn cancel_search(&mut self) {
        self.set_value("");
    }

    /// Shows the loading state for a search that has just been dispatched.
    pub fn start_search(&mut self) {
        self.presenter.show_spinner();
        self.presenter.hide_paginator();
        self.presenter.request_layout();
    }

    /// Switches to the results view and titles it after the current query.
    pub fn show_documents(&mut self) {
        self.presenter.set_search_state(SearchState::Active);
        let query = self.value();
        let title = entitle(&self.grammar, &query);
        self.presenter.set_title(&title);
        self.presenter.highlight(&query);
    }

    /// Leaves the results view.
    pub fn hide_search(&mut self) {
        self.presenter.set_search_state(SearchState::Idle);
    }

    /// Finishes a search that returned `count` results.
    pub fn done_searching(&mut self, count: usize) {
        let query = self.value();
        let search_type = self.grammar.search_type(&query);

        match self.dispatcher.mode() {
            SearchMode::Related { title } => {
                let header = related_title(count, &title, self.settings.title_truncate);
                self.presenter.set_title(&header);
            }
            SearchMode::Specific => self.presenter.set_title(&specific_title(count)),
            SearchMode::General if search_type == SearchType::Search => {
                let quote = self.grammar.extract(Category::Project, &query).is_some();
                let header = search_title(count, self.presenter.title(), quote);
                self.presenter.set_title(&header);
            }
            SearchMode::General => {}
        }

        if count == 0 {
            self.presenter.set_search_state(SearchState::Empty);
            self.presenter
                .show_empty_message(self.settings.messages.get(search_type));
        }

        self.presenter.hide_spinner();
        self.presenter.request_layout();
        debug!(count, %search_type, "search done");
    }

    /// Focuses the first token of a category, if any.
    pub fn focus_category(&mut self, category: Category) -> Focus {
        let focus = self.focus.focus_category(&self.facets, category);
        self.sync_draft();
        focus
    }

    /// Moves focus `direction` steps from `current`; see [`FocusNavigator::focus_next`].
    pub fn focus_next_facet(&mut self, current: Option<usize>, direction: isize) -> Focus {
        let focus = self.focus.focus_next(&self.facets, current, direction);
        self.sync_draft();
        focus
    }

    /// Returns focus to the input.
    pub fn focus_input(&mut self) {
        self.focus.reset();
        self.sync_draft();
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.focus.focus()
    }

    /// The token being edited, if any.
    pub fn focused_facet(&self) -> Option<&Facet> {
        self.focus.focused_index().and_then(|i| self.facets.get(i))
    }

    /// The tokens.
    pub fn facets(&self) -> &FacetCollection {
        &self.facets
    }

    /// Cloned tokens in order.
    pub fn tokens(&self) -> Vec<FacetToken> {
        self.facets.tokens().cloned().collect()
    }

    /// The grammar.
    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Mutable access to the dispatcher, for completing searches.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Turns the pending input into a token.
    ///
    /// Input naming a category opens an empty token of that category; other input becomes a
    /// text token. Blank input is discarded without adding a token.
    fn commit_input_as_facet(&mut self) {
        let content = self.input.trim().to_string();
        if content.is_empty() {
            debug!("facet trigger with empty input");
            self.input.clear();
            return;
        }
        match content.parse::<Category>() {
            Ok(category) => self.add_facet(category, ""),
            Err(_) => self.add_facet(Category::Text, &content),
        };
    }

    /// Loads the edit buffer from the focused token.
    fn sync_draft(&mut self) {
        self.draft = self
            .focused_facet()
            .map(|f| f.token.value().to_string())
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use facet_query::PrefixGrammar;

    use super::*;
    use crate::memory::{MemoryDispatcher, MemoryPresenter};

    /// Search box type used in these tests.
    type TestBox = SearchBox<PrefixGrammar, MemoryDispatcher, MemoryPresenter>;

    /// Builds a search box with in-memory collaborators.
    fn search_box() -> TestBox {
        SearchBox::new(
            PrefixGrammar,
            MemoryDispatcher::new(),
            MemoryPresenter::new("All Documents"),
            Keymap::default(),
            BoxSettings::default(),
        )
    }

    /// Presses a key given by name.
    fn press(b: &mut TestBox, key: &str) -> KeyOutcome {
        b.press(key.parse().unwrap())
    }

    /// Types each character of `text`.
    fn type_str(b: &mut TestBox, text: &str) {
        for ch in text.chars() {
            b.press(KeyEvent::new(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn set_value_builds_tokens() {
        let mut b = search_box();
        b.set_value("project:Acme foo");
        assert_eq!(
            b.tokens(),
            vec![
                FacetToken::new(Category::Project, "Acme"),
                FacetToken::text("foo")
            ]
        );
        assert_eq!(b.input(), "");
        assert_eq!(b.get_query(), "project:Acme foo");
    }

    #[test]
    fn get_query_includes_pending_input() {
        let mut b = search_box();
        b.set_value("project:Acme");
        b.set_input("draft");
        assert_eq!(b.get_query(), "project:Acme draft");

        let mut empty = search_box();
        empty.set_input("only input");
        assert_eq!(empty.get_query(), "only input");
    }

    #[test]
    fn enter_dispatches_search() {
        let mut b = search_box();
        b.set_value("budget");
        assert_eq!(press(&mut b, "enter"), KeyOutcome::Handled);
        assert_eq!(b.dispatcher().searches, vec!["budget"]);
    }

    #[test]
    fn enter_ignored_while_outstanding() {
        let mut b = search_box();
        b.set_value("budget");
        b.dispatcher_mut().outstanding = true;
        assert_eq!(press(&mut b, "enter"), KeyOutcome::PassThrough);
        assert!(b.dispatcher().searches.is_empty());
    }

    #[test]
    fn enter_with_empty_query_does_not_search() {
        let mut b = search_box();
        press(&mut b, "enter");
        assert!(b.dispatcher().searches.is_empty());
    }

    #[test]
    fn trigger_after_category_name_opens_facet() {
        let mut b = search_box();
        type_str(&mut b, "project");
        assert_eq!(press(&mut b, ":"), KeyOutcome::Handled);
        assert_eq!(b.tokens(), vec![FacetToken::new(Category::Project, "")]);
        assert_eq!(b.focus(), Focus::Token(0));
        assert_eq!(b.input(), "");

        type_str(&mut b, "Acme Corp");
        assert_eq!(b.get_query(), "project:\"Acme Corp\"");
    }

    #[test]
    fn trigger_after_plain_word_makes_text_token() {
        let mut b = search_box();
        type_str(&mut b, "budget");
        press(&mut b, ":");
        assert_eq!(b.tokens(), vec![FacetToken::text("budget")]);
    }

    #[test]
    fn trigger_with_empty_input_is_suppressed() {
        let mut b = search_box();
        assert_eq!(press(&mut b, ":"), KeyOutcome::Handled);
        assert!(b.facets().is_empty());
        assert_eq!(b.input(), "");
    }

    #[test]
    fn trigger_discards_blank_input() {
        let mut b = search_box();
        b.set_input("   ");
        assert_eq!(press(&mut b, ":"), KeyOutcome::Handled);
        assert!(b.facets().is_empty());
        assert_eq!(b.input(), "");
        b.insert_text("budget");
        assert_eq!(b.input(), "budget");
    }

    #[test]
    fn trigger_inside_token_is_typed() {
        let mut b = search_box();
        b.add_facet(Category::Text, "a");
        assert_eq!(press(&mut b, ":"), KeyOutcome::PassThrough);
        assert_eq!(b.tokens(), vec![FacetToken::text("a:")]);
    }

    #[test]
    fn tab_with_no_tokens_stays_on_input() {
        let mut b = search_box();
        assert_eq!(press(&mut b, "tab"), KeyOutcome::Handled);
        assert_eq!(b.focus(), Focus::Input);
    }

    #[test]
    fn tab_and_shift_tab() {
        let mut b = search_box();
        b.set_value("project:Acme account:jdoe foo");
        press(&mut b, "tab");
        assert_eq!(b.focus(), Focus::Token(0));
        press(&mut b, "tab");
        assert_eq!(b.focus(), Focus::Token(1));
        press(&mut b, "shift+tab");
        assert_eq!(b.focus(), Focus::Token(0));
        press(&mut b, "shift+tab");
        assert_eq!(b.focus(), Focus::Input);
        press(&mut b, "shift+tab");
        assert_eq!(b.focus(), Focus::Token(2));
    }

    #[test]
    fn other_keys_pass_through() {
        let mut b = search_box();
        assert_eq!(press(&mut b, "x"), KeyOutcome::PassThrough);
        assert_eq!(press(&mut b, "escape"), KeyOutcome::PassThrough);
        assert_eq!(b.input(), "x");
        press(&mut b, "backspace");
        assert_eq!(b.input(), "");
    }

    #[test]
    fn cancel_clears_everything() {
        let mut b = search_box();
        b.set_value("project:Acme foo");
        b.set_input("more");
        b.cancel_search();
        assert!(b.facets().is_empty());
        assert_eq!(b.value(), "");
    }

    #[test]
    fn remove_focused_facet_returns_to_input() {
        let mut b = search_box();
        b.set_value("project:Acme foo");
        b.focus_category(Category::Text);
        let id = b.focused_facet().unwrap().id;
        b.remove_facet(id);
        assert_eq!(b.focus(), Focus::Input);
        assert_eq!(b.get_query(), "project:Acme");
        b.remove_facet(id);
        assert_eq!(b.facets().len(), 1);
    }

    #[test]
    fn select_category_focuses_first_of_category() {
        let mut b = search_box();
        b.set_value("project:Acme");
        b.set_input("proj");
        b.select_category(Category::Project);
        assert_eq!(b.facets().len(), 2);
        assert_eq!(b.focus(), Focus::Token(0));
        assert_eq!(b.input(), "");
    }

    #[test]
    fn editing_keeps_tokens_trimmed() {
        let mut b = search_box();
        let id = b.add_facet(Category::Group, "");
        type_str(&mut b, "news room ");
        assert_eq!(b.facets().get(0).unwrap().token.value(), "news room");
        press(&mut b, "backspace");
        press(&mut b, "backspace");
        assert_eq!(b.facets().get(0).unwrap().token.value(), "news roo");
        assert!(b.update_facet(id, "desk"));
        type_str(&mut b, "s");
        assert_eq!(b.get_query(), "group:desks");
    }

    #[test]
    fn done_searching_empty_project() {
        let mut b = search_box();
        b.set_value("project:Acme");
        b.done_searching(0);
        let p = b.presenter();
        assert_eq!(p.state, SearchState::Empty);
        assert_eq!(
            p.empty_message.as_deref(),
            Some("This project does not contain any documents.")
        );
        assert_eq!(p.title, "All Documents");
    }

    #[test]
    fn done_searching_empty_everything() {
        let mut b = search_box();
        b.set_value("");
        b.done_searching(0);
        assert_eq!(
            b.presenter().empty_message.as_deref(),
            Some("There are no documents.")
        );
    }

    #[test]
    fn done_searching_text_search_title() {
        let mut b = search_box();
        b.set_value("project:Acme budget");
        b.show_documents();
        assert_eq!(b.presenter().title, "Acme");
        b.done_searching(3);
        assert_eq!(b.presenter().title, "3 Results in \u{201c}Acme\u{201d}");
        assert!(b.presenter().empty_message.is_none());
    }

    #[test]
    fn done_searching_unquoted_scope() {
        let mut b = search_box();
        b.set_value("budget");
        b.show_documents();
        b.done_searching(0);
        assert_eq!(b.presenter().title, "No Results in All Documents");
        assert_eq!(
            b.presenter().empty_message.as_deref(),
            Some("Your search did not match any documents.")
        );
    }

    #[test]
    fn done_searching_related_and_specific() {
        let mut b = search_box();
        b.dispatcher_mut().mode = SearchMode::Related {
            title: "Budget memo".into(),
        };
        b.done_searching(2);
        assert_eq!(b.presenter().title, "2 Documents Related to \"Budget memo\"");

        b.dispatcher_mut().mode = SearchMode::Specific;
        b.done_searching(1);
        assert_eq!(b.presenter().title, "1 Document");
    }

    #[test]
    fn lifecycle_toggles_presenter() {
        let mut b = search_box();
        b.start_search();
        assert!(b.presenter().spinner);
        assert!(!b.presenter().paginator);
        b.done_searching(5);
        assert!(!b.presenter().spinner);
        assert_eq!(b.presenter().layouts, 2);
        b.hide_search();
        assert_eq!(b.presenter().state, SearchState::Idle);
    }
}
