use super::highlight::HighlightCategory;

/// An RGB triple, kept free of any toolkit color type.
pub type Rgb = (u8, u8, u8);

/// Light or dark color scheme, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Base colors of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                background: (0xFF, 0xFF, 0xFF),
                foreground: (0x00, 0x00, 0x00),
            },
            ThemeMode::Dark => Palette {
                background: (0x2E, 0x2E, 0x2E),
                foreground: (0xFF, 0xFF, 0xFF),
            },
        }
    }

    /// Text color used for a highlight category.
    pub fn category_color(self, category: HighlightCategory) -> Rgb {
        match (self, category) {
            (ThemeMode::Light, HighlightCategory::Keyword) => (0, 0, 255),
            (ThemeMode::Dark, HighlightCategory::Keyword) => (100, 149, 237),
            (ThemeMode::Light, HighlightCategory::String) => (0, 128, 0),
            (ThemeMode::Dark, HighlightCategory::String) => (106, 190, 106),
            (_, HighlightCategory::Comment) => (128, 128, 128),
            (_, HighlightCategory::SearchMatch) => (0, 0, 0),
        }
    }

    /// Background fill for a highlight category; `None` keeps the text area
    /// background.
    pub fn category_background(self, category: HighlightCategory) -> Option<Rgb> {
        match category {
            HighlightCategory::SearchMatch => Some((255, 255, 0)),
            _ => None,
        }
    }
}
