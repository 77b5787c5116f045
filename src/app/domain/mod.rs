//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and Position
//! - Highlight spans and their categories
//! - Application settings and theme modes
//! - Message types for the event system

pub mod document;
pub mod highlight;
pub mod messages;
pub mod settings;
pub mod theme;

pub use document::{Document, Position};
pub use highlight::{HighlightCategory, HighlightSpan};
pub use messages::{BufferEdit, Message};
pub use settings::{AppSettings, FontSetting, ThemePreference};
pub use theme::ThemeMode;
