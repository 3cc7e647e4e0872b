//! Small text helpers for result headers.

/// Suffix used when text is truncated.
const ELLIPSIS: &str = "...";

/// Returns `word` pluralized for `count`.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Truncates `text` to at most `max` characters, ending in `...` when shortened.
///
/// A limit too small to hold the ellipsis cuts the text without one.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().take(max).collect();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
