use fltk::dialog;

use crate::app::domain::FontSetting;

/// Ask for a font family and then a size. Returns `None` when either prompt is
/// cancelled or the input is invalid, leaving the current font in place.
pub fn prompt_font(current: &FontSetting) -> Option<FontSetting> {
    let family = dialog::input_default("Enter font family:", &current.family)?;
    let size = dialog::input_default("Enter font size:", &current.size.to_string());
    FontSetting::parse(Some(&family), size.as_deref())
}
