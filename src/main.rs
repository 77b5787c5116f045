#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use fltk::{app, prelude::*};
use log::info;

use theme_pad::app::{AppSettings, AppState, Message, detect_system_theme};
use theme_pad::ui::main_window::build_main_window;
use theme_pad::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let theme = settings.resolve_theme(detect_system_theme);
    info!("Starting ThemePad with {:?} theme", theme);

    let mut widgets = build_main_window(settings.window_width, settings.window_height, &sender);
    build_menu(&mut widgets.menu, &sender);

    let mut state = AppState::new(widgets, sender, settings, theme);
    state.window.show();

    #[cfg(target_os = "windows")]
    theme_pad::ui::theme::set_windows_titlebar_theme(&state.window, theme);

    if let Some(path) = std::env::args().nth(1) {
        state.open_file(path);
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::BufferEdited(edit) => state.apply_buffer_edit(edit),
                Message::ContentChanged => state.refresh_views(),

                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileExit => {
                    state.close_dialogs();
                    app.quit();
                }

                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::EditCut => state.edit_cut(),
                Message::EditCopy => state.edit_copy(),
                Message::EditPaste => state.edit_paste(),

                Message::ShowFindReplace => state.show_find_replace(),
                Message::Find(term) => state.find(&term),
                Message::ReplaceAll {
                    needle,
                    replacement,
                } => state.replace_all(&needle, &replacement),

                Message::ChangeFont => state.change_font(),
                Message::ShowAbout => state.show_about(),
            }
        }
    }
}
