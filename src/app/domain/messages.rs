/// One modification of the editor's text buffer, in byte offsets.
///
/// Deletion happens first (`deleted` bytes at `offset`), then `inserted` is
/// placed at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEdit {
    pub offset: usize,
    pub deleted: usize,
    pub inserted: String,
}

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExit,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    ShowFindReplace,
    ChangeFont,

    // Find & Replace dialog
    Find(String),
    ReplaceAll { needle: String, replacement: String },

    // Help
    ShowAbout,

    // Editor buffer
    BufferEdited(BufferEdit),
    ContentChanged,
}
