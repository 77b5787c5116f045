//! ThemePad - a minimal, system-themed text editor built on FLTK.
//!
//! The text-processing core (document model, word count, search, syntax
//! tokenizing, replace) lives in `app` and has no display dependency. The FLTK
//! shell lives in `ui` and in `app::state`.

pub mod app;
pub mod ui;
