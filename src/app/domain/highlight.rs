/// Visual category of a highlighted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Keyword,
    String,
    Comment,
    SearchMatch,
}

impl HighlightCategory {
    pub const ALL: [HighlightCategory; 4] = [
        HighlightCategory::Keyword,
        HighlightCategory::String,
        HighlightCategory::Comment,
        HighlightCategory::SearchMatch,
    ];

    /// Style character used in the style buffer. 'A' is reserved for plain text.
    pub fn style_char(self) -> u8 {
        match self {
            HighlightCategory::Keyword => b'B',
            HighlightCategory::String => b'C',
            HighlightCategory::Comment => b'D',
            HighlightCategory::SearchMatch => b'E',
        }
    }
}

/// A tagged region of one line. Columns are byte offsets into the line,
/// `start_column..end_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub category: HighlightCategory,
}

impl HighlightSpan {
    pub fn new(line: usize, start_column: usize, end_column: usize, category: HighlightCategory) -> Self {
        Self {
            line,
            start_column,
            end_column,
            category,
        }
    }

    pub fn len(&self) -> usize {
        self.end_column.saturating_sub(self.start_column)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
