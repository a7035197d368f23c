//! dreamscape-core
//!
//! Pure domain types, request validation, and prompt construction.
//! No I/O here — this is the shared vocabulary of the report pipeline.

pub mod error;
pub mod models;
pub mod prompts;
