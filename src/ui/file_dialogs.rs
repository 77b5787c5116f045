use fltk::dialog;

/// Text files first; FLTK offers the tab-separated patterns as choices.
const TEXT_FILES_FILTER: &str = "*.txt\t*";

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open File", TEXT_FILES_FILTER, directory.unwrap_or("."), false)
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save As", TEXT_FILES_FILTER, directory.unwrap_or("."), false)
}
