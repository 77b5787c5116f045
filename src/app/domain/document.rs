use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops::replace_all_in_text;

/// A (line, column) location. Columns are byte offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The editable text, held as lines.
///
/// Lines are split on `\n` only and there is always at least one line, so
/// `lines().join("\n")` reproduces the text exactly. A `\r` before the line
/// break stays part of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    pub file_path: Option<PathBuf>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            file_path: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.set_text(text);
        doc
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total length in bytes, line breaks included.
    pub fn len(&self) -> usize {
        self.lines.iter().map(String::len).sum::<usize>() + self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reset to an empty, untitled document.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn check(&self, pos: Position) -> Result<()> {
        let valid = self
            .lines
            .get(pos.line)
            .is_some_and(|line| line.is_char_boundary(pos.column));
        if valid {
            Ok(())
        } else {
            Err(AppError::InvalidPosition {
                line: pos.line,
                column: pos.column,
            })
        }
    }

    /// Convert a byte offset into the joined text to a position.
    pub fn position_of(&self, offset: usize) -> Result<Position> {
        let mut remaining = offset;
        for (line_no, line) in self.lines.iter().enumerate() {
            if remaining <= line.len() {
                let pos = Position::new(line_no, remaining);
                self.check(pos)?;
                return Ok(pos);
            }
            remaining -= line.len() + 1;
        }
        Err(AppError::InvalidPosition {
            line: self.lines.len(),
            column: remaining,
        })
    }

    /// Convert a position to a byte offset into the joined text.
    pub fn offset_of(&self, pos: Position) -> Result<usize> {
        self.check(pos)?;
        let before: usize = self.lines[..pos.line].iter().map(|l| l.len() + 1).sum();
        Ok(before + pos.column)
    }

    /// Insert `text` at `pos`. `text` may contain line breaks.
    pub fn insert(&mut self, pos: Position, text: &str) -> Result<()> {
        self.check(pos)?;
        if text.is_empty() {
            return Ok(());
        }

        let line = &self.lines[pos.line];
        let mut joined = String::with_capacity(line.len() + text.len());
        joined.push_str(&line[..pos.column]);
        joined.push_str(text);
        joined.push_str(&line[pos.column..]);

        let replacement: Vec<String> = joined.split('\n').map(str::to_string).collect();
        self.lines.splice(pos.line..=pos.line, replacement);
        Ok(())
    }

    /// Delete the text between `start` (inclusive) and `end` (exclusive).
    pub fn delete(&mut self, start: Position, end: Position) -> Result<()> {
        self.check(start)?;
        self.check(end)?;
        if end < start {
            return Err(AppError::InvalidPosition {
                line: end.line,
                column: end.column,
            });
        }

        let mut merged = self.lines[start.line][..start.column].to_string();
        merged.push_str(&self.lines[end.line][end.column..]);
        self.lines.splice(start.line..=end.line, std::iter::once(merged));
        Ok(())
    }

    /// Apply an edit expressed in byte offsets: delete `deleted` bytes at
    /// `offset`, then insert `inserted` there.
    pub fn apply_edit(&mut self, offset: usize, deleted: usize, inserted: &str) -> Result<()> {
        let start = self.position_of(offset)?;
        if deleted > 0 {
            let end = self.position_of(offset + deleted)?;
            self.delete(start, end)?;
        }
        self.insert(start, inserted)
    }

    /// Replace every occurrence of `needle`. Returns the number of replacements.
    ///
    /// An empty needle or replacement leaves the document untouched.
    pub fn replace_all(&mut self, needle: &str, replacement: &str) -> usize {
        if needle.is_empty() || replacement.is_empty() {
            return 0;
        }
        let (text, count) = replace_all_in_text(&self.text(), needle, replacement);
        if count > 0 {
            self.set_text(&text);
        }
        count
    }

    /// Replace the contents with the file at `path`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD. On error the document is unchanged.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} is not valid UTF-8; invalid sequences replaced", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        self.set_text(&text);
        self.file_path = Some(path.to_path_buf());
        info!("Loaded {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    /// Write the contents to the current file path.
    pub fn save(&self) -> Result<()> {
        let path = self.file_path.as_deref().ok_or(AppError::NoFilePath)?;
        self.write_to(path)
    }

    /// Write the contents to `path` and adopt it as the file path.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let text = self.text();
        fs::write(path, &text)?;
        info!("Saved {} ({} bytes)", path.display(), text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_one_empty_line() {
        let doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.text(), "");
        assert!(doc.is_empty());
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_from_text_splits_lines() {
        let doc = Document::from_text("one\ntwo\n");
        assert_eq!(doc.lines(), ["one", "two", ""]);
        assert_eq!(doc.text(), "one\ntwo\n");
        assert_eq!(doc.len(), 8);
    }

    #[test]
    fn test_crlf_is_kept_verbatim() {
        let doc = Document::from_text("a\r\nb");
        assert_eq!(doc.lines(), ["a\r", "b"]);
        assert_eq!(doc.text(), "a\r\nb");
    }

    #[test]
    fn test_insert_within_line() {
        let mut doc = Document::from_text("hello world");
        doc.insert(Position::new(0, 5), ",").unwrap();
        assert_eq!(doc.text(), "hello, world");
    }

    #[test]
    fn test_insert_with_line_breaks() {
        let mut doc = Document::from_text("ac\nz");
        doc.insert(Position::new(0, 1), "b\nx\ny").unwrap();
        assert_eq!(doc.lines(), ["ab", "x", "yc", "z"]);
    }

    #[test]
    fn test_insert_at_end_of_document() {
        let mut doc = Document::from_text("abc");
        doc.insert(Position::new(0, 3), "\n").unwrap();
        assert_eq!(doc.lines(), ["abc", ""]);
    }

    #[test]
    fn test_insert_invalid_positions() {
        let mut doc = Document::from_text("héllo");
        assert!(matches!(
            doc.insert(Position::new(1, 0), "x"),
            Err(AppError::InvalidPosition { line: 1, column: 0 })
        ));
        assert!(doc.insert(Position::new(0, 99), "x").is_err());
        // inside the two-byte 'é'
        assert!(doc.insert(Position::new(0, 2), "x").is_err());
        assert_eq!(doc.text(), "héllo");
    }

    #[test]
    fn test_delete_within_line() {
        let mut doc = Document::from_text("hello, world");
        doc.delete(Position::new(0, 5), Position::new(0, 6)).unwrap();
        assert_eq!(doc.text(), "hello world");
    }

    #[test]
    fn test_delete_across_lines() {
        let mut doc = Document::from_text("first\nsecond\nthird");
        doc.delete(Position::new(0, 3), Position::new(2, 2)).unwrap();
        assert_eq!(doc.lines(), ["firird"]);
    }

    #[test]
    fn test_delete_reversed_range_is_rejected() {
        let mut doc = Document::from_text("abc");
        assert!(doc.delete(Position::new(0, 2), Position::new(0, 1)).is_err());
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_position_and_offset_conversion() {
        let doc = Document::from_text("ab\ncde\n");
        assert_eq!(doc.position_of(0).unwrap(), Position::new(0, 0));
        assert_eq!(doc.position_of(2).unwrap(), Position::new(0, 2));
        assert_eq!(doc.position_of(3).unwrap(), Position::new(1, 0));
        assert_eq!(doc.position_of(7).unwrap(), Position::new(2, 0));
        assert!(doc.position_of(8).is_err());

        for offset in 0..=doc.len() {
            let pos = doc.position_of(offset).unwrap();
            assert_eq!(doc.offset_of(pos).unwrap(), offset);
        }
    }

    #[test]
    fn test_apply_edit_mirrors_buffer_operations() {
        let mut doc = Document::from_text("hello world");
        // typing
        doc.apply_edit(11, 0, "!").unwrap();
        assert_eq!(doc.text(), "hello world!");
        // backspace
        doc.apply_edit(11, 1, "").unwrap();
        assert_eq!(doc.text(), "hello world");
        // selection replaced by paste spanning lines
        doc.apply_edit(6, 5, "there\nfriend").unwrap();
        assert_eq!(doc.lines(), ["hello there", "friend"]);
        // delete the line break
        doc.apply_edit(11, 1, " ").unwrap();
        assert_eq!(doc.text(), "hello there friend");
    }

    #[test]
    fn test_replace_all_on_document() {
        let mut doc = Document::from_text("if a:\n    if b:");
        assert_eq!(doc.replace_all("if", "when"), 2);
        assert_eq!(doc.text(), "when a:\n    when b:");
        assert_eq!(doc.replace_all("missing", "x"), 0);
        assert_eq!(doc.replace_all("", "x"), 0);
    }

    #[test]
    fn test_replace_all_with_empty_replacement_is_noop() {
        let mut doc = Document::from_text("hello world hello");
        assert_eq!(doc.replace_all("hello", ""), 0);
        assert_eq!(doc.text(), "hello world hello");
        assert_eq!(doc.lines(), ["hello world hello"]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let samples = ["", "plain", "two\nlines\n", "windows\r\nendings\r\n", "no newline", "世界\n\n\n"];

        for text in samples {
            let mut doc = Document::from_text(text);
            doc.save_as(&path).unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), text);

            let mut loaded = Document::new();
            loaded.load(&path).unwrap();
            assert_eq!(loaded.text(), text);
            assert_eq!(loaded.file_path.as_deref(), Some(path.as_path()));
        }
    }

    #[test]
    fn test_save_without_path() {
        let doc = Document::from_text("text");
        assert!(matches!(doc.save(), Err(AppError::NoFilePath)));
    }

    #[test]
    fn test_save_to_existing_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut doc = Document::new();
        doc.load(file.path()).unwrap();
        doc.set_text("updated");
        doc.save().unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "updated");
    }

    #[test]
    fn test_load_missing_file_leaves_document_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::from_text("keep me");
        let result = doc.load(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(doc.text(), "keep me");
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::from_text("text");
        let result = doc.save_as(&dir.path().join("no_such_dir").join("file.txt"));
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\nok").unwrap();

        let mut doc = Document::new();
        doc.load(&path).unwrap();
        assert_eq!(doc.lines(), ["caf\u{FFFD}", "ok"]);
    }

    #[test]
    fn test_clear_resets_path() {
        let mut doc = Document::from_text("abc");
        doc.file_path = Some(PathBuf::from("a.txt"));
        doc.clear();
        assert_eq!(doc, Document::new());
    }
}
