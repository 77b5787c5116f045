use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    app::Sender,
    dialog,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use log::{debug, error, info, warn};

use super::controllers::highlight::HighlightController;
use super::domain::{AppSettings, BufferEdit, Document, FontSetting, Message, ThemeMode};
use super::infrastructure::buffer::{BufferSync, read_buffer_text, watch_buffer};
use super::infrastructure::error::AppError;
use super::services::highlight::KeywordSet;
use super::services::text_ops::{with_default_extension, word_count};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::find::FindReplaceDialog;
use crate::ui::dialogs::font::prompt_font;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::{APP_TITLE, MainWidgets};
use crate::ui::renderer::StyleBufferRenderer;
use crate::ui::theme::apply_theme;

/// Everything the editor window owns. The `Document` is the source of truth
/// for the engines; the FLTK buffer mirrors it for display and input.
pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub word_count_frame: Frame,
    pub sender: Sender<Message>,
    pub theme: ThemeMode,
    pub font: FontSetting,
    pub highlight: HighlightController,
    buffer: TextBuffer,
    renderer: StyleBufferRenderer,
    sync: Rc<BufferSync>,
    refresh_deferred: bool,
    find_dialog: Option<FindReplaceDialog>,
    /// Last directory used in a file open/save dialog.
    last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings, theme: ThemeMode) -> Self {
        let MainWidgets {
            wind: mut window,
            mut menu,
            mut text_editor,
            mut word_count_frame,
        } = widgets;

        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let sync = Rc::new(BufferSync::default());
        watch_buffer(&mut buffer, &style_buffer, sync.clone(), sender);
        text_editor.set_buffer(buffer.clone());

        apply_theme(&mut text_editor, &mut window, &mut menu, &mut word_count_frame, theme);

        let font = settings.font();
        let renderer = StyleBufferRenderer::new(&text_editor, &style_buffer, theme, &font);

        let keywords = settings
            .keywords
            .as_ref()
            .map(|words| KeywordSet::from_words(words.iter().cloned()))
            .unwrap_or_default();
        let highlight = HighlightController::new(keywords, settings.highlighting_enabled);

        let mut state = Self {
            document: Document::new(),
            editor: text_editor,
            window,
            menu,
            word_count_frame,
            sender,
            theme,
            font,
            highlight,
            buffer,
            renderer,
            sync,
            refresh_deferred: false,
            find_dialog: None,
            last_open_directory: None,
        };
        state.update_window_title();
        state.refresh_views();
        state
    }

    /// Update the window title based on the document's file path
    pub fn update_window_title(&mut self) {
        match self.document.file_path {
            Some(ref path) => {
                let label = format!("{} - {}", APP_TITLE, path.display());
                self.window.set_label(&label);
            }
            None => self.window.set_label(APP_TITLE),
        }
    }

    // --- Content synchronisation ---

    /// Mirror an edit made in the widget into the document.
    pub fn apply_buffer_edit(&mut self, edit: BufferEdit) {
        self.sync.edit_applied();
        if let Err(e) = self.document.apply_edit(edit.offset, edit.deleted, &edit.inserted) {
            warn!("Edit at {} could not be mirrored: {}", edit.offset, e);
        }
        if self.refresh_deferred && self.sync.pending() == 0 {
            self.refresh_views();
        }
    }

    /// Word count first, then highlighting. Deferred while widget edits are
    /// still queued, so spans always match the displayed text.
    pub fn refresh_views(&mut self) {
        if self.sync.pending() > 0 {
            self.refresh_deferred = true;
            return;
        }
        self.refresh_deferred = false;

        if self.document.len() != self.buffer.length().max(0) as usize {
            warn!("Document out of sync with editor; reloading from buffer");
            let text = read_buffer_text(&self.buffer);
            self.document.set_text(&text);
        }

        let words: usize = self.document.lines().iter().map(|line| word_count(line)).sum();
        self.word_count_frame.set_label(&format!("Words: {}", words));

        self.highlight.refresh(&self.document, &mut self.renderer);
    }

    /// Push the document into the widget after a shell-side change.
    fn push_document(&mut self) {
        let text = self.document.text();
        let mut buffer = self.buffer.clone();
        self.sync.while_syncing(|| buffer.set_text(&text));
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
        self.update_window_title();
        self.refresh_views();
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- File operations ---

    /// Discards the current document; there is no unsaved-changes prompt.
    pub fn file_new(&mut self) {
        self.document.clear();
        self.push_document();
        info!("New document");
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(path);
        }
    }

    pub fn open_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.remember_directory(path);
        match self.document.load(path) {
            Ok(()) => self.push_document(),
            Err(e) => report_error("Error opening file", path, &e),
        }
    }

    pub fn file_save(&mut self) {
        if self.document.file_path.is_none() {
            self.file_save_as();
            return;
        }
        if let Err(e) = self.document.save() {
            let path = self.document.file_path.clone().unwrap_or_default();
            report_error("Error saving file", &path, &e);
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(chosen) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        let path = PathBuf::from(with_default_extension(&chosen));
        self.remember_directory(&path);
        match self.document.save_as(&path) {
            Ok(()) => self.update_window_title(),
            Err(e) => report_error("Error saving file", &path, &e),
        }
    }

    // --- Edit ---

    pub fn edit_undo(&mut self) {
        let _ = self.editor.undo();
        self.refresh_views();
    }

    pub fn edit_redo(&mut self) {
        let _ = self.editor.redo();
        self.refresh_views();
    }

    pub fn edit_cut(&mut self) {
        let _ = self.editor.cut();
        self.refresh_views();
    }

    pub fn edit_copy(&mut self) {
        let _ = self.editor.copy();
    }

    /// The pasted text arrives later as a paste event on the editor.
    pub fn edit_paste(&mut self) {
        let _ = self.editor.paste();
    }

    // --- Find & Replace ---

    pub fn show_find_replace(&mut self) {
        let sender = self.sender;
        self.find_dialog
            .get_or_insert_with(|| FindReplaceDialog::new(&sender))
            .show();
    }

    /// Highlight every occurrence of `term`; an empty term clears highlights.
    pub fn find(&mut self, term: &str) {
        self.highlight.set_search_term(term);
        self.refresh_views();
        debug!("Search for {:?}: {} matches", term, self.highlight.match_count());
    }

    /// Both a needle and a replacement are required; otherwise nothing
    /// happens.
    pub fn replace_all(&mut self, needle: &str, replacement: &str) {
        if needle.is_empty() || replacement.is_empty() {
            return;
        }

        let count = self.document.replace_all(needle, replacement);
        info!("Replaced {} occurrence(s) of {:?}", count, needle);
        if count > 0 {
            self.push_document();
        }
        dialog::message_default(&format!("Replaced {} occurrence(s)", count));
    }

    // --- Format ---

    /// Invalid or cancelled input keeps the current font.
    pub fn change_font(&mut self) {
        match prompt_font(&self.font) {
            Some(font) => {
                info!("Font changed to {} {}", font.family, font.size);
                self.renderer.set_font(&font);
                self.font = font;
            }
            None => debug!("Font unchanged"),
        }
    }

    // --- Help ---

    pub fn show_about(&self) {
        show_about_dialog();
    }

    pub fn close_dialogs(&mut self) {
        if let Some(ref mut find_dialog) = self.find_dialog {
            find_dialog.hide();
        }
    }
}

fn report_error(context: &str, path: &Path, err: &AppError) {
    error!("{} {}: {}", context, path.display(), err);
    dialog::alert_default(&format!("{}: {}", context, err));
}
