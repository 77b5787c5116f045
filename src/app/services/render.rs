use crate::app::domain::{Document, HighlightSpan};

/// Style byte for unhighlighted text.
pub const PLAIN_STYLE: u8 = b'A';

/// Anything that can display a document with highlight spans applied.
pub trait HighlightRenderer {
    fn render(&mut self, document: &Document, spans: &[HighlightSpan]);
}

/// Build a style string with one style byte per byte of the document text.
///
/// Spans are painted in order, so later spans win where they overlap. Span
/// columns past the end of their line are clamped; spans on missing lines are
/// ignored.
pub fn style_string(document: &Document, spans: &[HighlightSpan]) -> String {
    let lines = document.lines();
    let mut line_offsets = Vec::with_capacity(lines.len());
    let mut offset = 0;
    for line in lines {
        line_offsets.push(offset);
        offset += line.len() + 1;
    }

    let mut styles = vec![PLAIN_STYLE; document.len()];
    for span in spans {
        let Some(line) = lines.get(span.line) else {
            continue;
        };
        let base = line_offsets[span.line];
        let start = base + span.start_column.min(line.len());
        let end = base + span.end_column.min(line.len());
        if start < end {
            styles[start..end].fill(span.category.style_char());
        }
    }

    styles.into_iter().map(char::from).collect()
}
