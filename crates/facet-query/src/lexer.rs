//! Prefix scanner.
//!
//! Finds every `name:value` fragment in a query string, along with its byte span. Values are
//! either a bare run of non-whitespace characters or a quoted string (`"..."` or `'...'`). A
//! single space is allowed between the colon and the value. Inside quotes, a backslash escapes
//! the quote character or another backslash.

use std::{iter::Peekable, ops::Range, str::CharIndices};

/// A `name:value` fragment found in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    /// The prefix name, as written.
    pub name: String,
    /// The value with quotes stripped.
    pub value: String,
    /// Byte range of the whole fragment in the input.
    pub span: Range<usize>,
}

/// Scans a query string for prefixed fragments.
struct Scanner<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with one-character lookahead.
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Scans the entire input.
    fn scan(mut self) -> Vec<PrefixMatch> {
        let mut matches = Vec::new();

        loop {
            self.skip_whitespace();
            if self.chars.peek().is_none() {
                break;
            }
            let start = self.position();
            if let Some(found) = self.read_word(start) {
                matches.push(found);
            }
        }

        matches
    }

    /// Reads one whitespace-delimited word, returning a match if it is a prefix.
    fn read_word(&mut self, start: usize) -> Option<PrefixMatch> {
        let mut name = String::new();

        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                return None;
            }

            if ch == ':' {
                self.advance(); // consume the colon
                if name.is_empty() || !name.chars().all(is_name_char) {
                    self.skip_word();
                    return None;
                }
                let value = self.read_value();
                return Some(PrefixMatch {
                    name,
                    value,
                    span: start..self.position(),
                });
            }

            name.push(ch);
            self.advance();
        }

        None
    }

    /// Reads the value following a prefix colon.
    fn read_value(&mut self) -> String {
        if let Some(&(_, ' ')) = self.chars.peek() {
            let mut ahead = self.chars.clone();
            ahead.next();
            match ahead.peek() {
                Some(&(_, ch)) if !ch.is_whitespace() => self.advance(),
                _ => return String::new(),
            }
        }

        match self.chars.peek() {
            Some(&(_, quote @ ('"' | '\''))) => {
                self.advance(); // consume opening quote
                self.read_quoted(quote)
            }
            _ => self.read_bare(),
        }
    }

    /// Reads up to the closing quote. An unclosed quote runs to the end of input.
    fn read_quoted(&mut self, quote: char) -> String {
        let mut content = String::new();
        while let Some((_, ch)) = self.chars.next() {
            if ch == quote {
                break;
            }
            if ch == '\\'
                && let Some(&(_, next)) = self.chars.peek()
                && (next == quote || next == '\\')
            {
                content.push(next);
                self.advance();
                continue;
            }
            content.push(ch);
        }
        content
    }

    /// Reads a run of non-whitespace characters.
    fn read_bare(&mut self) -> String {
        let mut content = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            content.push(ch);
            self.advance();
        }
        content
    }

    /// Skips the remainder of the current word.
    fn skip_word(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Current byte position in the input.
    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(idx, _)| idx)
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        self.chars.next();
    }
}

/// Characters allowed in a prefix name.
fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Finds every prefixed fragment in a query string, in order of appearance.
pub fn scan(input: &str) -> Vec<PrefixMatch> {
    Scanner::new(input).scan()
}
