use std::ops::Range;
use std::path::Path;

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Find next occurrence of search string in text
///
/// Returns the byte position of the match, or None if not found.
/// Matching is literal and case-sensitive. Searches from start_pos onwards.
pub fn find_in_text(text: &str, search: &str, start_pos: usize) -> Option<usize> {
    if search.is_empty() || start_pos >= text.len() {
        return None;
    }
    text.get(start_pos..)?.find(search).map(|pos| start_pos + pos)
}

/// Every non-overlapping occurrence of `search`, scanning left to right.
///
/// Each search resumes at the end of the previous match.
pub fn find_matches(text: &str, search: &str) -> Vec<Range<usize>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(found_pos) = find_in_text(text, search, pos) {
        let end = found_pos + search.len();
        matches.push(found_pos..end);
        pos = end;
    }

    matches
}

/// Replace all occurrences of search string with replacement
///
/// The scan never revisits replaced text, so a replacement containing the
/// search string is not matched again.
///
/// Returns (new_text, count_of_replacements)
pub fn replace_all_in_text(text: &str, search: &str, replace: &str) -> (String, usize) {
    let matches = find_matches(text, search);
    if matches.is_empty() {
        return (text.to_string(), 0);
    }

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for range in &matches {
        result.push_str(&text[last..range.start]);
        result.push_str(replace);
        last = range.end;
    }
    result.push_str(&text[last..]);

    (result, matches.len())
}

/// Byte offset at which each line starts. Always contains at least `0`.
pub fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// Append `.txt` when the chosen path has no extension.
pub fn with_default_extension(path: &str) -> String {
    if Path::new(path).extension().is_some() {
        path.to_string()
    } else {
        format!("{}.txt", path)
    }
}
