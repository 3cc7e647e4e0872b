//! Editing state for a faceted search box.
//!
//! A [`SearchBox`] holds the tokens of the query being composed, tracks which token (if any)
//! is being edited, and turns key presses into token edits, focus moves and searches:
//!
//! - **Enter** searches, unless a search is already outstanding
//! - **`:`** turns the pending input into a facet (`project` + `:` opens a project facet)
//! - **Tab / Shift+Tab** walk the tokens, falling back onto the input at either end
//!
//! # Example
//!
//! ```
//! use facet_box::{BoxSettings, Keymap, MemoryDispatcher, MemoryPresenter, SearchBox};
//! use facet_query::PrefixGrammar;
//!
//! let mut search = SearchBox::new(
//!     PrefixGrammar,
//!     MemoryDispatcher::new(),
//!     MemoryPresenter::new("All Documents"),
//!     Keymap::default(),
//!     BoxSettings::default(),
//! );
//! search.set_value("project:Acme budget");
//! assert_eq!(search.facets().len(), 2);
//! assert!(search.search_event());
//! assert_eq!(search.dispatcher().searches, vec!["project:Acme budget"]);
//! ```

#![warn(missing_docs)]

mod collaborators;
mod collection;
mod focus;
mod inflect;
mod keys;
mod memory;
mod messages;
mod search_box;
mod title;

pub use collaborators::{Presenter, SearchDispatcher, SearchMode, SearchState};
pub use collection::{Facet, FacetCollection, TokenId};
pub use focus::{Direction, Focus, FocusNavigator};
pub use inflect::{pluralize, truncate};
pub use keys::{BoxAction, KeyCode, KeyEvent, KeyParseError, Keymap};
pub use memory::{MemoryDispatcher, MemoryPresenter};
pub use messages::EmptyMessages;
pub use search_box::{BoxSettings, KeyOutcome, SearchBox};
pub use title::{entitle, related_title, search_title, specific_title};
