use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextBuffer, TextEditor},
};

use crate::app::domain::{Document, FontSetting, HighlightCategory, HighlightSpan, ThemeMode};
use crate::app::domain::theme::Rgb;
use crate::app::services::render::{HighlightRenderer, style_string};

fn color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// FLTK's built-in fonts, matched by common family names.
pub fn builtin_font(family: &str) -> Option<Font> {
    match family.trim().to_lowercase().as_str() {
        "helvetica" | "arial" | "sans" | "sans-serif" => Some(Font::Helvetica),
        "helvetica bold" | "arial bold" => Some(Font::HelveticaBold),
        "courier" | "courier new" | "mono" | "monospace" => Some(Font::Courier),
        "courier bold" => Some(Font::CourierBold),
        "times" | "times new roman" | "serif" => Some(Font::Times),
        "times bold" => Some(Font::TimesBold),
        "screen" => Some(Font::Screen),
        "screen bold" => Some(Font::ScreenBold),
        _ => None,
    }
}

/// Resolve a family name to an FLTK font, falling back to a lookup among the
/// fonts FLTK has loaded.
pub fn resolve_font(family: &str) -> Font {
    builtin_font(family).unwrap_or_else(|| Font::by_name(family.trim()))
}

/// Style table indexed by style byte: 'A' plain, then one entry per category
/// in `HighlightCategory::ALL` order. Categories with a background fill it.
pub fn style_table(theme: ThemeMode, font: Font, size: i32) -> Vec<StyleTableEntryExt> {
    let background = color(theme.palette().background);
    let plain = StyleTableEntryExt {
        color: color(theme.palette().foreground),
        font,
        size,
        attr: TextAttr::None,
        bgcolor: background,
    };
    std::iter::once(plain)
        .chain(HighlightCategory::ALL.iter().map(|&category| {
            let fill = theme.category_background(category);
            StyleTableEntryExt {
                color: color(theme.category_color(category)),
                font,
                size,
                attr: if fill.is_some() { TextAttr::BgColor } else { TextAttr::None },
                bgcolor: fill.map(color).unwrap_or(background),
            }
        }))
        .collect()
}

/// Renders highlight spans through the editor's style buffer.
pub struct StyleBufferRenderer {
    editor: TextEditor,
    style_buffer: TextBuffer,
    theme: ThemeMode,
    font: Font,
    font_size: i32,
}

impl StyleBufferRenderer {
    pub fn new(editor: &TextEditor, style_buffer: &TextBuffer, theme: ThemeMode, font: &FontSetting) -> Self {
        let mut renderer = Self {
            editor: editor.clone(),
            style_buffer: style_buffer.clone(),
            theme,
            font: resolve_font(&font.family),
            font_size: font.point_size(),
        };
        renderer.bind();
        renderer
    }

    /// Switch font; the editor's base font and every style entry follow.
    pub fn set_font(&mut self, font: &FontSetting) {
        self.font = resolve_font(&font.family);
        self.font_size = font.point_size();
        self.bind();
    }

    fn bind(&mut self) {
        self.editor.set_text_font(self.font);
        self.editor.set_text_size(self.font_size);
        let table = style_table(self.theme, self.font, self.font_size);
        self.editor.set_highlight_data_ext(self.style_buffer.clone(), table);
        self.editor.redraw();
    }
}

impl HighlightRenderer for StyleBufferRenderer {
    fn render(&mut self, document: &Document, spans: &[HighlightSpan]) {
        self.style_buffer.set_text(&style_string(document, spans));
        self.editor.redraw();
    }
}
