use log::debug;

use crate::app::domain::{Document, HighlightCategory, HighlightSpan};
use crate::app::services::highlight::{KeywordSet, search_spans, syntax_spans};
use crate::app::services::render::HighlightRenderer;

/// Owns the highlighting inputs (keyword set, active search term) and
/// recomputes every span from scratch on each refresh.
pub struct HighlightController {
    keywords: KeywordSet,
    search_term: Option<String>,
    pub highlighting_enabled: bool,
    match_count: usize,
}

impl HighlightController {
    pub fn new(keywords: KeywordSet, highlighting_enabled: bool) -> Self {
        Self {
            keywords,
            search_term: None,
            highlighting_enabled,
            match_count: 0,
        }
    }

    /// Set the term whose occurrences are highlighted. An empty term clears
    /// search highlighting.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = if term.is_empty() { None } else { Some(term.to_string()) };
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Number of search matches found by the last refresh.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Syntax spans first, search spans last so matches stay visible.
    pub fn compute_spans(&self, document: &Document) -> Vec<HighlightSpan> {
        let mut spans = if self.highlighting_enabled {
            syntax_spans(document, &self.keywords)
        } else {
            Vec::new()
        };
        if let Some(ref term) = self.search_term {
            spans.extend(search_spans(document, term));
        }
        spans
    }

    pub fn refresh<R: HighlightRenderer + ?Sized>(&mut self, document: &Document, renderer: &mut R) {
        let spans = self.compute_spans(document);
        self.match_count = spans
            .iter()
            .filter(|s| s.category == HighlightCategory::SearchMatch)
            .count();
        debug!("Rendering {} highlight spans", spans.len());
        renderer.render(document, &spans);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(String, Vec<HighlightSpan>)>,
    }

    impl HighlightRenderer for RecordingRenderer {
        fn render(&mut self, document: &Document, spans: &[HighlightSpan]) {
            self.frames.push((document.text(), spans.to_vec()));
        }
    }

    fn categories(spans: &[HighlightSpan]) -> Vec<HighlightCategory> {
        spans.iter().map(|s| s.category).collect()
    }

    #[test]
    fn test_refresh_renders_syntax_spans() {
        let mut controller = HighlightController::new(KeywordSet::default(), true);
        let mut renderer = RecordingRenderer::default();
        let doc = Document::from_text("if 'x' # done");

        controller.refresh(&doc, &mut renderer);

        assert_eq!(renderer.frames.len(), 1);
        let (text, spans) = &renderer.frames[0];
        assert_eq!(text, "if 'x' # done");
        assert_eq!(
            categories(spans),
            vec![HighlightCategory::Keyword, HighlightCategory::String, HighlightCategory::Comment]
        );
    }

    #[test]
    fn test_search_spans_come_last() {
        let mut controller = HighlightController::new(KeywordSet::default(), true);
        controller.set_search_term("if");
        let doc = Document::from_text("if elif");

        let spans = controller.compute_spans(&doc);
        assert_eq!(
            categories(&spans),
            vec![
                HighlightCategory::Keyword,
                HighlightCategory::Keyword,
                HighlightCategory::SearchMatch,
                HighlightCategory::SearchMatch,
            ]
        );
    }

    #[test]
    fn test_empty_search_term_clears_matches() {
        let mut controller = HighlightController::new(KeywordSet::default(), false);
        let mut renderer = RecordingRenderer::default();
        let doc = Document::from_text("aa aa aa");

        controller.set_search_term("aa");
        controller.refresh(&doc, &mut renderer);
        assert_eq!(controller.match_count(), 3);

        controller.set_search_term("");
        assert_eq!(controller.search_term(), None);
        controller.refresh(&doc, &mut renderer);
        assert_eq!(controller.match_count(), 0);
        assert!(renderer.frames[1].1.is_empty());
    }

    #[test]
    fn test_disabled_highlighting_keeps_search() {
        let mut controller = HighlightController::new(KeywordSet::default(), false);
        controller.set_search_term("return");
        let doc = Document::from_text("return x");

        let spans = controller.compute_spans(&doc);
        assert_eq!(categories(&spans), vec![HighlightCategory::SearchMatch]);
    }

    #[test]
    fn test_matches_follow_edits() {
        let mut controller = HighlightController::new(KeywordSet::default(), true);
        let mut renderer = RecordingRenderer::default();
        let mut doc = Document::from_text("cat");
        controller.set_search_term("cat");

        controller.refresh(&doc, &mut renderer);
        assert_eq!(controller.match_count(), 1);

        doc.apply_edit(3, 0, " cat").unwrap();
        controller.refresh(&doc, &mut renderer);
        assert_eq!(controller.match_count(), 2);
    }
}
