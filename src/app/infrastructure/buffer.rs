use std::cell::Cell;
use std::ffi::{CStr, c_char, c_void};
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use crate::app::domain::{BufferEdit, Message};
use crate::app::services::render::PLAIN_STYLE;

unsafe extern "C" {
    fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
    fn free(ptr: *mut c_void);
}

/// Full text of `buffer`, used to resynchronise the document with the widget.
///
/// `TextBuffer::text()` never frees the copy FLTK hands back, so the copy is
/// taken and released here instead.
pub fn read_buffer_text(buffer: &TextBuffer) -> String {
    // SAFETY: `as_ptr` is the live Fl_Text_Buffer owned by `buffer`. The
    // returned copy is either null or a NUL-terminated malloc'd string that we
    // own and release exactly once.
    unsafe {
        let copy = Fl_Text_Buffer_text(buffer.as_ptr() as *mut c_void);
        if copy.is_null() {
            return String::new();
        }
        let text = CStr::from_ptr(copy).to_string_lossy().into_owned();
        free(copy.cast());
        text
    }
}

/// Shared between the buffer's modify callback and the shell.
#[derive(Debug, Default)]
pub struct BufferSync {
    syncing: Cell<bool>,
    pending: Cell<usize>,
}

impl BufferSync {
    /// Run `f` with reporting switched off, so buffer writes made by the shell
    /// are not echoed back as edits.
    pub fn while_syncing<T>(&self, f: impl FnOnce() -> T) -> T {
        self.syncing.set(true);
        let result = f();
        self.syncing.set(false);
        result
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    /// Edits reported but not yet applied to the document.
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    fn edit_sent(&self) {
        self.pending.set(self.pending.get() + 1);
    }

    pub fn edit_applied(&self) {
        self.pending.set(self.pending.get().saturating_sub(1));
    }
}

/// Keeps `style_buffer` the same length as `buffer` and reports every user
/// edit as `Message::BufferEdited`.
pub fn watch_buffer(
    buffer: &mut TextBuffer,
    style_buffer: &TextBuffer,
    sync: Rc<BufferSync>,
    sender: Sender<Message>,
) {
    let source = buffer.clone();
    let mut style_buf = style_buffer.clone();

    buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
        if inserted <= 0 && deleted <= 0 {
            return;
        }

        // FLTK applies the deletion first, then the insertion at `pos`.
        if deleted > 0 {
            style_buf.remove(pos, pos + deleted);
        }
        if inserted > 0 {
            let filler = char::from(PLAIN_STYLE).to_string().repeat(inserted as usize);
            style_buf.insert(pos, &filler);
        }

        if sync.is_syncing() {
            return;
        }

        let inserted_text = if inserted > 0 {
            source.text_range(pos, pos + inserted).unwrap_or_default()
        } else {
            String::new()
        };
        sync.edit_sent();
        sender.send(Message::BufferEdited(BufferEdit {
            offset: pos as usize,
            deleted: deleted.max(0) as usize,
            inserted: inserted_text,
        }));
    });
}
