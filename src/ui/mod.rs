//! FLTK shell: window, menu, dialogs and the style-buffer renderer.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod renderer;
pub mod theme;
