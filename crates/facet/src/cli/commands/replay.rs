//! Implementation of `facet replay`.

use std::{fs, io, path::Path, process::ExitCode};

use facet_box::{
    Focus, KeyCode, KeyEvent, MemoryDispatcher, MemoryPresenter, SearchBox, SearchMode,
    SearchState,
};
use facet_query::{FacetToken, PrefixGrammar};
use serde::Serialize;
use tracing::debug;

use crate::cli::{
    args::{ModeArg, ReplayCommand},
    context::CommandContext,
    output::print_json,
    script::{Step, parse_script},
};

/// Title shown before the first search.
const INITIAL_TITLE: &str = "All Documents";

/// Search box driven by a replay script.
type ReplayBox = SearchBox<PrefixGrammar, MemoryDispatcher, MemoryPresenter>;

/// Final state printed by `--json`.
#[derive(Serialize)]
struct JsonReplay<'a> {
    /// Composed query.
    query: String,
    /// Tokens in order.
    tokens: Vec<FacetToken>,
    /// Edit focus.
    focus: Focus,
    /// Searches dispatched and whether one is in flight.
    dispatcher: &'a MemoryDispatcher,
    /// Display state.
    presenter: &'a MemoryPresenter,
}

/// A search box plus the bookkeeping a replay needs.
struct Replay {
    /// The box under test.
    search: ReplayBox,
    /// Result count reported when a search completes.
    count: usize,
}

impl Replay {
    /// Wraps a search box; completed searches report `count` results.
    fn new(search: ReplayBox, count: usize) -> Self {
        Self { search, count }
    }

    /// Applies one step and returns a note for the transcript, if any.
    fn apply(&mut self, step: &Step) -> Option<String> {
        let before = self.search.dispatcher().searches.len();
        let mut note = None;

        match step {
            Step::Type(text) => {
                for ch in text.chars() {
                    self.search.press(KeyEvent::new(KeyCode::Char(ch)));
                }
            }
            Step::Key(event) => {
                self.search.press(*event);
            }
            Step::Set(query) => self.search.set_value(query),
            Step::Input(text) => self.search.set_input(text),
            Step::Remove(index) => match self.search.facets().get(*index).map(|f| f.id) {
                Some(id) => self.search.remove_facet(id),
                None => note = Some(format!("no token at {index}")),
            },
            Step::Focus(category) => {
                if self.search.facets().find_category(*category).is_none() {
                    note = Some(format!("no {category} token"));
                }
                self.search.focus_category(*category);
            }
            Step::Select(category) => self.search.select_category(*category),
            Step::Complete(count) => {
                if self.search.dispatcher().outstanding {
                    self.search.dispatcher_mut().complete();
                    self.finish(count.unwrap_or(self.count));
                    note = Some("completed".to_string());
                } else {
                    note = Some("nothing outstanding".to_string());
                }
            }
            Step::Cancel => self.search.cancel_search(),
        }

        let dispatched = self.search.dispatcher().searches.get(before).cloned();
        if let Some(query) = dispatched {
            debug!(query = %query, "replay search dispatched");
            self.search.start_search();
            if !self.search.dispatcher().outstanding {
                self.finish(self.count);
            }
            note = Some(format!("search: {query}"));
        }
        note
    }

    /// Shows results for the current query.
    fn finish(&mut self, count: usize) {
        self.search.show_documents();
        self.search.done_searching(count);
    }

    /// One transcript line describing the state after `line`.
    fn describe(&self, line: &str, note: Option<&str>) -> String {
        let mut out = format!(
            "{line:<28} {:?} [{}]",
            self.search.value(),
            focus_name(self.search.focus())
        );
        if let Some(note) = note {
            out.push_str("  ; ");
            out.push_str(note);
        }
        out
    }

    /// Summary printed after the transcript.
    fn summary(&self) -> Vec<String> {
        let dispatcher = self.search.dispatcher();
        let presenter = self.search.presenter();
        let mut lines = vec![format!("searches: {}", dispatcher.searches.len())];
        for (i, query) in dispatcher.searches.iter().enumerate() {
            lines.push(format!("  {}. {query}", i + 1));
        }
        lines.push(format!("title: {}", presenter.title));
        lines.push(format!("state: {}", state_name(presenter.state)));
        if let Some(message) = &presenter.empty_message {
            lines.push(format!("empty: {message}"));
        }
        lines
    }
}

/// Runs a replay script against a fresh search box.
pub fn run(ctx: &CommandContext, cmd: &ReplayCommand) -> ExitCode {
    let source = match read_script(&cmd.script) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", cmd.script.display());
            return ExitCode::FAILURE;
        }
    };
    let steps = match parse_script(&source) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("error: {}: {e}", cmd.script.display());
            return ExitCode::FAILURE;
        }
    };
    let keymap = match ctx.keymap() {
        Ok(keymap) => keymap,
        Err(code) => return code,
    };

    let dispatcher = MemoryDispatcher {
        hold: cmd.outstanding,
        mode: search_mode(cmd),
        ..MemoryDispatcher::new()
    };
    let search = SearchBox::new(
        PrefixGrammar::new(),
        dispatcher,
        MemoryPresenter::new(INITIAL_TITLE),
        keymap,
        ctx.box_settings(),
    );
    let mut replay = Replay::new(search, cmd.count);

    for (line, step) in &steps {
        let note = replay.apply(step);
        if !cmd.json {
            println!("{}", replay.describe(line, note.as_deref()));
        }
    }

    if cmd.json {
        return print_json(&JsonReplay {
            query: replay.search.value(),
            tokens: replay.search.tokens(),
            focus: replay.search.focus(),
            dispatcher: replay.search.dispatcher(),
            presenter: replay.search.presenter(),
        });
    }

    println!();
    for line in replay.summary() {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

/// Reads the script from a file, or stdin for `-`.
fn read_script(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

/// Dispatcher mode selected on the command line.
fn search_mode(cmd: &ReplayCommand) -> SearchMode {
    match cmd.mode {
        ModeArg::General => SearchMode::General,
        ModeArg::Specific => SearchMode::Specific,
        ModeArg::Related => SearchMode::Related {
            title: cmd.document.clone(),
        },
    }
}

/// Short label for a focus.
fn focus_name(focus: Focus) -> String {
    match focus {
        Focus::Input => "input".to_string(),
        Focus::Token(index) => format!("token {index}"),
    }
}

/// Lowercase label for a search state.
fn state_name(state: SearchState) -> &'static str {
    match state {
        SearchState::Idle => "idle",
        SearchState::Active => "active",
        SearchState::Empty => "empty",
    }
}

#[cfg(test)]
mod tests {
    use facet_box::{BoxSettings, Keymap};

    use super::*;

    /// Builds a replay over default settings.
    fn replay(hold: bool, count: usize) -> Replay {
        let dispatcher = MemoryDispatcher {
            hold,
            ..MemoryDispatcher::new()
        };
        Replay::new(
            SearchBox::new(
                PrefixGrammar::new(),
                dispatcher,
                MemoryPresenter::new(INITIAL_TITLE),
                Keymap::default(),
                BoxSettings::default(),
            ),
            count,
        )
    }

    /// Applies every step of a script.
    fn run_script(replay: &mut Replay, source: &str) -> Vec<Option<String>> {
        parse_script(source)
            .unwrap()
            .iter()
            .map(|(_, step)| replay.apply(step))
            .collect()
    }

    #[test]
    fn immediate_search_completes_with_count() {
        let mut r = replay(false, 3);
        let notes = run_script(&mut r, "set project:Acme budget\nkey enter\n");
        assert_eq!(notes[1].as_deref(), Some("search: project:Acme budget"));
        let presenter = r.search.presenter();
        assert_eq!(presenter.title, "3 Results in \u{201c}Acme\u{201d}");
        assert_eq!(presenter.state, SearchState::Active);
        assert!(!presenter.spinner);
    }

    #[test]
    fn held_search_waits_for_complete() {
        let mut r = replay(true, 0);
        let notes = run_script(
            &mut r,
            "set account:jdoe\nkey enter\nkey enter\ncomplete\ncomplete\n",
        );
        assert_eq!(notes[2], None);
        assert_eq!(notes[3].as_deref(), Some("completed"));
        assert_eq!(notes[4].as_deref(), Some("nothing outstanding"));
        assert_eq!(r.search.dispatcher().searches.len(), 1);
        assert_eq!(
            r.search.presenter().empty_message.as_deref(),
            Some("This account does not have any documents.")
        );
    }

    #[test]
    fn remove_and_focus_report_misses() {
        let mut r = replay(false, 0);
        let notes = run_script(&mut r, "set project:Acme\nremove 4\nfocus group\nremove 0\n");
        assert_eq!(notes[1].as_deref(), Some("no token at 4"));
        assert_eq!(notes[2].as_deref(), Some("no group token"));
        assert!(r.search.facets().is_empty());
    }

    #[test]
    fn transcript_line_shows_query_and_focus() {
        let mut r = replay(false, 0);
        run_script(&mut r, "type project\nkey :\ntype Acme\n");
        let line = r.describe("type Acme", None);
        assert!(line.starts_with("type Acme"));
        assert!(line.ends_with("\"project:Acme\" [token 0]"));
    }
}
