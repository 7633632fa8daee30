//! Pure functions for question detection and extraction.
//!
//! A message is a question when its text starts with one `?` optionally followed by ASCII whitespace
//! or zero-width non-joiners. Only the start is checked; a `?` later in the text does not count.

use bridge_core::Event;
use regex::Regex;
use std::sync::LazyLock;

/// Leading question marker: one `?`, then any run of tab, LF, FF, CR, space or U+200C.
/// Other Unicode spaces (e.g. U+00A0) are part of the question.
pub const QUESTION_PATTERN_SRC: &str = r"^\?[\t\n\x0C\r \u{200C}]*";

/// Compiled once; read-only afterwards.
static QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(QUESTION_PATTERN_SRC).expect("question pattern is a compile-time constant and must be valid")
});

/// Strips the question marker from the start of `text`, once. `None` if `text` is not a question.
pub fn extract_question(text: &str) -> Option<&str> {
    QUESTION_PATTERN.find(text).map(|m| &text[m.end()..])
}

/// Resolves the question carried by `event`, if any. Events without a message never qualify.
pub fn question_from_event(event: &Event) -> Option<&str> {
    event
        .message
        .as_ref()
        .and_then(|m| extract_question(&m.text))
}
