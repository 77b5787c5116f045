//! Span producers: whitespace-token syntax classification and literal search.
//!
//! The syntax pass is deliberately approximate. It classifies whole
//! whitespace-separated tokens, so `foo,` or `(if)` never match a keyword.

use std::collections::HashSet;

use crate::app::domain::{Document, HighlightCategory, HighlightSpan};
use crate::app::services::text_ops::{find_matches, line_starts};

/// Python's reserved words, the default keyword set.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whitespace-separated tokens of `line` with their byte offsets.
fn tokens(line: &str) -> impl Iterator<Item = (usize, &str)> {
    let base = line.as_ptr() as usize;
    line.split_whitespace()
        .map(move |token| (token.as_ptr() as usize - base, token))
}

fn is_quoted(token: &str) -> bool {
    let bytes = token.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last)) => {
            bytes.len() >= 2 && (first == b'"' || first == b'\'') && first == last
        }
        _ => false,
    }
}

/// Classify the tokens of one line.
///
/// A token starting with `#` marks the rest of the line as a comment and ends
/// the scan. Otherwise a token quoted with matching `'` or `"` is a string and
/// an exact keyword is a keyword.
pub fn syntax_spans_for_line(line_no: usize, line: &str, keywords: &KeywordSet) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();

    for (start, token) in tokens(line) {
        let end = start + token.len();
        if token.starts_with('#') {
            spans.push(HighlightSpan::new(line_no, start, line.len(), HighlightCategory::Comment));
            break;
        } else if is_quoted(token) {
            spans.push(HighlightSpan::new(line_no, start, end, HighlightCategory::String));
        } else if keywords.contains(token) {
            spans.push(HighlightSpan::new(line_no, start, end, HighlightCategory::Keyword));
        }
    }

    spans
}

/// Syntax spans for the whole document, line by line.
pub fn syntax_spans(document: &Document, keywords: &KeywordSet) -> Vec<HighlightSpan> {
    document
        .lines()
        .iter()
        .enumerate()
        .flat_map(|(line_no, line)| syntax_spans_for_line(line_no, line, keywords))
        .collect()
}

/// One `SearchMatch` span per occurrence of `needle`. A match that crosses a
/// line break is split into one span per line.
pub fn search_spans(document: &Document, needle: &str) -> Vec<HighlightSpan> {
    let text = document.text();
    let starts = line_starts(&text);
    let locate = |offset: usize| {
        let line = starts.partition_point(|&s| s <= offset) - 1;
        (line, offset - starts[line])
    };

    let mut spans = Vec::new();
    for range in find_matches(&text, needle) {
        let (start_line, start_col) = locate(range.start);
        let (end_line, end_col) = locate(range.end);
        for line in start_line..=end_line {
            let from = if line == start_line { start_col } else { 0 };
            let to = if line == end_line { end_col } else { document.lines()[line].len() };
            if from < to {
                spans.push(HighlightSpan::new(line, from, to, HighlightCategory::SearchMatch));
            }
        }
    }
    spans
}
