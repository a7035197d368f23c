//! dreamscape-export
//!
//! Model output → HTML fragment → bound template → PDF on disk.

pub mod error;
pub mod pdf;
pub mod render;
pub mod sanitize;
