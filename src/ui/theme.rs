use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::ThemeMode;

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    status: &mut Frame,
    theme: ThemeMode,
) {
    let palette = theme.palette();
    let (br, bg, bb) = palette.background;
    let (fr, fg, fb) = palette.foreground;
    let background = Color::from_rgb(br, bg, bb);
    let foreground = Color::from_rgb(fr, fg, fb);

    editor.set_color(background);
    editor.set_text_color(foreground);
    editor.set_cursor_color(foreground);

    if theme.is_dark() {
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        window.set_color(Color::from_rgb(25, 25, 25));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        status.set_color(Color::from_rgb(25, 25, 25));
        status.set_label_color(Color::from_rgb(220, 220, 220));
    } else {
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        window.set_color(Color::from_rgb(240, 240, 240));
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        status.set_color(Color::from_rgb(240, 240, 240));
        status.set_label_color(Color::Black);
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
    status.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, theme: ThemeMode) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    // SAFETY: the window has been shown, so raw_handle() is a live HWND, and
    // `on` outlives both calls.
    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if theme.is_dark() { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
