use serde::{Deserialize, Serialize};

/// Zero-based cursor position; `character` counts Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Word under the cursor, as a half-open character span on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRange {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Finds the word touching `position`.
///
/// A cursor sitting just after the last character of a word still selects
/// that word. Returns `None` past the end of the document or off any word.
pub fn word_range_at(document: &str, position: Position) -> Option<WordRange> {
    let line = document.lines().nth(position.line)?;
    let chars: Vec<char> = line.chars().collect();
    if position.character > chars.len() {
        return None;
    }

    let anchor = if chars.get(position.character).copied().is_some_and(is_word_char) {
        position.character
    } else if position.character > 0 && is_word_char(chars[position.character - 1]) {
        position.character - 1
    } else {
        return None;
    };

    let start = chars[..anchor]
        .iter()
        .rposition(|&ch| !is_word_char(ch))
        .map_or(0, |index| index + 1);
    let end = chars[anchor..]
        .iter()
        .position(|&ch| !is_word_char(ch))
        .map_or(chars.len(), |offset| anchor + offset);

    Some(WordRange {
        line: position.line,
        start,
        end,
        text: chars[start..end].iter().collect(),
    })
}
