use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read asset {path}: {source}")]
    Asset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown page format: {0}")]
    UnknownPageFormat(String),
}
