//! Services layer - text operations over documents.
//!
//! - Text operations (word count, literal search, replace)
//! - Syntax and search highlighting
//! - Style string rendering

pub mod highlight;
pub mod render;
pub mod text_ops;
