//! HTML → PDF on disk.
//!
//! [`ReportRenderer`] prepares the final HTML (banner inlined as a data URI,
//! since the rendering engine may not resolve relative paths), hands it to a
//! [`PdfRenderer`] backend, and writes the bytes to the requested path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

use crate::error::ExportError;

// ── Page format ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    /// CSS `@page { size }` keyword.
    pub fn css_size(self) -> &'static str {
        match self {
            PageFormat::A4 => "A4",
            PageFormat::Letter => "letter",
        }
    }
}

impl FromStr for PageFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(PageFormat::A4),
            "letter" => Ok(PageFormat::Letter),
            _ => Err(ExportError::UnknownPageFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_size())
    }
}

// ── Rendering backend ────────────────────────────────────────────────────────

/// An HTML-to-PDF engine.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str, format: PageFormat) -> Result<Vec<u8>, ExportError>;
}

/// Headless Chromium via `--print-to-pdf`.
pub struct ChromiumRenderer {
    binary: PathBuf,
}

impl ChromiumRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// Add an `@page` rule so the engine lays out on the requested paper size.
pub fn with_page_size(html: &str, format: PageFormat) -> String {
    let rule = format!("<style>@page {{ size: {}; }}</style>", format.css_size());
    match html.find("</head>") {
        Some(pos) => format!("{}{rule}{}", &html[..pos], &html[pos..]),
        None => format!("{rule}{html}"),
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render_pdf(&self, html: &str, format: PageFormat) -> Result<Vec<u8>, ExportError> {
        let workdir = tempfile::tempdir().map_err(|e| ExportError::Pdf(e.to_string()))?;
        let input = workdir.path().join("report.html");
        let output = workdir.path().join("report.pdf");

        tokio::fs::write(&input, with_page_size(html, format))
            .await
            .map_err(|e| ExportError::Pdf(format!("staging HTML: {e}")))?;

        let result = tokio::process::Command::new(&self.binary)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", output.display()))
            .arg(format!("file://{}", input.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ExportError::Pdf(format!("failed to launch {}: {e}", self.binary.display()))
            })?;

        if !result.status.success() {
            return Err(ExportError::Pdf(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        let bytes = tokio::fs::read(&output)
            .await
            .map_err(|e| ExportError::Pdf(format!("reading rendered PDF: {e}")))?;
        if bytes.is_empty() {
            return Err(ExportError::Pdf("renderer produced an empty file".to_string()));
        }

        debug!(bytes = bytes.len(), %format, "chromium rendered PDF");
        Ok(bytes)
    }
}

// ── Report renderer ──────────────────────────────────────────────────────────

/// Replace every literal `file_name` reference with a base64 data URI.
pub fn inline_banner(html: &str, file_name: &str, image: &[u8]) -> String {
    let mime = mime_for(file_name);
    let uri = format!("data:{mime};base64,{}", STANDARD.encode(image));
    html.replace(file_name, &uri)
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Renders final HTML to a PDF file, inlining the banner image first.
#[derive(Clone)]
pub struct ReportRenderer {
    backend: Arc<dyn PdfRenderer>,
    banner_path: PathBuf,
    format: PageFormat,
}

impl ReportRenderer {
    pub fn new(backend: Arc<dyn PdfRenderer>, banner_path: impl Into<PathBuf>, format: PageFormat) -> Self {
        Self {
            backend,
            banner_path: banner_path.into(),
            format,
        }
    }

    pub async fn render(&self, html: &str, output_path: &Path) -> Result<(), ExportError> {
        let image = tokio::fs::read(&self.banner_path)
            .await
            .map_err(|source| ExportError::Asset {
                path: self.banner_path.clone(),
                source,
            })?;
        let file_name = self
            .banner_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("banner.png");
        let html = inline_banner(html, file_name, &image);

        let bytes = self.backend.render_pdf(&html, self.format).await?;

        tokio::fs::write(output_path, &bytes)
            .await
            .map_err(|source| ExportError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;

        info!(path = %output_path.display(), bytes = bytes.len(), "PDF written");
        Ok(())
    }
}
