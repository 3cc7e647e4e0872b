//! End-to-end editing sessions against the search box.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use facet_box::{
    BoxSettings, Focus, KeyEvent, KeyOutcome, Keymap, MemoryDispatcher, MemoryPresenter,
    SearchBox, SearchState,
};
use facet_query::{Category, FacetToken, PrefixGrammar, parse, serialize};

/// Search box wired to in-memory collaborators.
type Session = SearchBox<PrefixGrammar, MemoryDispatcher, MemoryPresenter>;

/// Creates a session whose dispatcher holds searches outstanding until completed.
fn session() -> Session {
    let dispatcher = MemoryDispatcher {
        hold: true,
        ..MemoryDispatcher::new()
    };
    SearchBox::new(
        PrefixGrammar,
        dispatcher,
        MemoryPresenter::new("All Documents"),
        Keymap::default(),
        BoxSettings::default(),
    )
}

/// Presses a sequence of keys by name.
fn keys(s: &mut Session, names: &[&str]) {
    for name in names {
        let event: KeyEvent = name.parse().unwrap();
        s.press(event);
    }
}

/// Types text one character at a time.
fn type_text(s: &mut Session, text: &str) {
    for ch in text.chars() {
        s.press(KeyEvent::new(facet_box::KeyCode::Char(ch)));
    }
}

/// Asserts that focus never points outside the token list.
fn assert_focus_in_bounds(s: &Session) {
    if let Focus::Token(index) = s.focus() {
        assert!(index < s.facets().len(), "focus {index} out of bounds");
    }
}

#[test]
fn compose_query_from_keystrokes() {
    let mut s = session();
    type_text(&mut s, "project");
    keys(&mut s, &[":"]);
    type_text(&mut s, "City Hall");
    keys(&mut s, &["tab"]);
    assert_eq!(s.focus(), Focus::Input);

    type_text(&mut s, "budget");
    assert_eq!(s.get_query(), "project:\"City Hall\" budget");

    keys(&mut s, &["enter"]);
    assert_eq!(s.dispatcher().searches, vec!["project:\"City Hall\" budget"]);
}

#[test]
fn overlapping_searches_are_dropped() {
    let mut s = session();
    s.set_value("budget");
    keys(&mut s, &["enter", "enter", "enter"]);
    assert_eq!(s.dispatcher().searches.len(), 1);

    s.dispatcher_mut().complete();
    keys(&mut s, &["enter"]);
    assert_eq!(s.dispatcher().searches.len(), 2);
}

#[test]
fn enter_while_outstanding_passes_through() {
    let mut s = session();
    s.set_value("budget");
    s.dispatcher_mut().outstanding = true;
    let outcome = s.press("enter".parse().unwrap());
    assert_eq!(outcome, KeyOutcome::PassThrough);
    assert!(s.dispatcher().searches.is_empty());
}

#[test]
fn set_value_round_trips_through_get_query() {
    let mut s = session();
    let query = "filter:published account:jdoe project:\"Acme Corp\" quarterly report";
    s.set_value(query);
    let rebuilt = s.get_query();
    assert_eq!(
        rebuilt,
        "project:\"Acme Corp\" account:jdoe filter:published quarterly report"
    );
    assert_eq!(parse(&PrefixGrammar, &rebuilt), parse(&PrefixGrammar, query));
    assert_eq!(serialize(&parse(&PrefixGrammar, &rebuilt)), rebuilt);
}

#[test]
fn edited_value_with_leading_quote_keeps_later_tokens() {
    let mut s = session();
    let id = s.add_facet(Category::Project, "");
    assert!(s.update_facet(id, "\"Acme"));
    s.add_facet(Category::Account, "jdoe");
    let query = s.get_query();
    assert_eq!(
        parse(&PrefixGrammar, &query),
        vec![
            FacetToken::new(Category::Project, "\"Acme"),
            FacetToken::new(Category::Account, "jdoe")
        ]
    );
}

#[test]
fn scenario_project_and_text() {
    let mut s = session();
    s.set_value("project:Acme foo");
    assert_eq!(
        s.tokens(),
        vec![
            FacetToken::new(Category::Project, "Acme"),
            FacetToken::text("foo")
        ]
    );
    assert_eq!(s.get_query(), "project:Acme foo");
}

#[test]
fn focus_stays_in_bounds_through_edits() {
    let mut s = session();
    s.set_value("project:Acme account:jdoe group:desk foo");
    keys(&mut s, &["shift+tab"]);
    assert_eq!(s.focus(), Focus::Token(3));

    let ids: Vec<_> = s.facets().iter().map(|f| f.id).collect();
    for id in ids.iter().rev() {
        s.remove_facet(*id);
        assert_focus_in_bounds(&s);
        keys(&mut s, &["tab"]);
        assert_focus_in_bounds(&s);
    }
    assert!(s.facets().is_empty());
    assert_eq!(s.focus(), Focus::Input);
}

#[test]
fn only_one_token_is_ever_editable() {
    let mut s = session();
    s.set_value("project:Acme account:jdoe");
    s.add_facet(Category::Group, "desk");
    assert_eq!(s.focus(), Focus::Token(2));
    s.focus_category(Category::Project);
    assert_eq!(s.focus(), Focus::Token(0));
    assert_eq!(s.focused_facet().unwrap().token.category(), Category::Project);
}

#[test]
fn search_lifecycle_with_no_results() {
    let mut s = session();
    s.set_value("project:Acme");
    keys(&mut s, &["enter"]);
    s.start_search();
    s.show_documents();
    s.dispatcher_mut().complete();
    s.done_searching(0);

    let p = s.presenter();
    assert_eq!(p.state, SearchState::Empty);
    assert_eq!(p.title, "Acme");
    assert_eq!(
        p.empty_message.as_deref(),
        Some("This project does not contain any documents.")
    );
    assert!(!p.spinner);
    assert_eq!(p.highlighted.as_deref(), Some("project:Acme"));
}

#[test]
fn cancel_returns_to_quiescent_state() {
    let mut s = session();
    s.set_value("project:Acme foo");
    keys(&mut s, &["tab"]);
    s.cancel_search();
    assert_eq!(s.focus(), Focus::Input);
    assert_eq!(s.value(), "");
}
