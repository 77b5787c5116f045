//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages, spans)
//! - `controllers/` - Orchestration (HighlightController)
//! - `services/` - Text operations, highlighting, style rendering
//! - `infrastructure/` - External integrations (FLTK buffer, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    AppSettings, BufferEdit, Document, FontSetting, HighlightCategory, HighlightSpan, Message,
    Position, ThemeMode, ThemePreference,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_theme;
pub use state::AppState;
