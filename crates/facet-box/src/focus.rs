//! Focus navigation between facet tokens and the free-text input.
//!
//! Focus is either on the trailing input or on exactly one token, so at most one token can be
//! in edit mode at a time. Moving past either end of the token list always lands back on the
//! input; navigation never wraps.

use facet_query::Category;
use serde::Serialize;
use tracing::debug;

use crate::collection::FacetCollection;

/// Where edit focus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// The free-text input has focus.
    #[default]
    Input,
    /// The token at this index is being edited.
    Token(usize),
}

/// Direction of a tab traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

/// Tracks and moves edit focus.
#[derive(Debug, Clone, Default)]
pub struct FocusNavigator {
    /// Current focus.
    focus: Focus,
}

impl FocusNavigator {
    /// Creates a navigator with the input focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the focused token, if any.
    pub fn focused_index(&self) -> Option<usize> {
        match self.focus {
            Focus::Input => None,
            Focus::Token(index) => Some(index),
        }
    }

    /// Returns focus to the input.
    pub fn reset(&mut self) {
        self.set(Focus::Input);
    }

    /// Focuses a token by index, or the input if the index is out of range.
    pub fn focus_token(&mut self, collection: &FacetCollection, index: usize) -> Focus {
        let focus = if index < collection.len() {
            Focus::Token(index)
        } else {
            Focus::Input
        };
        self.set(focus)
    }

    /// Focuses the first token of a category. Leaves focus unchanged if there is none.
    pub fn focus_category(&mut self, collection: &FacetCollection, category: Category) -> Focus {
        match collection.find_category(category) {
            Some(index) => self.set(Focus::Token(index)),
            None => self.focus,
        }
    }

    /// Moves focus `direction` steps from `current`.
    ///
    /// When `current` is `None` the walk starts at the end of the list for a negative
    /// direction and at the start otherwise. Landing outside the list focuses the input.
    pub fn focus_next(
        &mut self,
        collection: &FacetCollection,
        current: Option<usize>,
        direction: isize,
    ) -> Focus {
        let len = collection.len();
        let base = match current {
            Some(index) => index,
            None if direction < 0 => len,
            None => 0,
        };
        let focus = base
            .checked_add_signed(direction)
            .filter(|&next| next < len)
            .map_or(Focus::Input, Focus::Token);
        self.set(focus)
    }

    /// Handles Tab or Shift+Tab from the current focus.
    ///
    /// From the input, Tab goes to the first token and Shift+Tab to the last. From a token,
    /// either key steps one token, overflowing onto the input.
    pub fn advance(&mut self, collection: &FacetCollection, direction: Direction) -> Focus {
        match (self.focus, direction) {
            (Focus::Input, Direction::Forward) => self.focus_next(collection, None, 0),
            (Focus::Input, Direction::Backward) => {
                self.focus_next(collection, Some(collection.len()), -1)
            }
            (Focus::Token(index), Direction::Forward) => {
                self.focus_next(collection, Some(index), 1)
            }
            (Focus::Token(index), Direction::Backward) => {
                self.focus_next(collection, Some(index), -1)
            }
        }
    }

    /// Adjusts focus after the token at `index` was removed.
    pub fn on_removed(&mut self, index: usize) {
        match self.focus {
            Focus::Token(focused) if focused == index => {
                self.set(Focus::Input);
            }
            Focus::Token(focused) if focused > index => {
                self.set(Focus::Token(focused - 1));
            }
            _ => {}
        }
    }

    /// Records a transition.
    fn set(&mut self, focus: Focus) -> Focus {
        if focus != self.focus {
            debug!(from = ?self.focus, to = ?focus, "focus moved");
        }
        self.focus = focus;
        focus
    }
}
