#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Barrier;

use dreamscape_core::models::request::ReportSubmission;
use dreamscape_export::error::ExportError;
use dreamscape_export::pdf::{PageFormat, PdfRenderer, ReportRenderer};
use dreamscape_llm::CompletionModel;
use dreamscape_llm::error::LlmError;
use dreamscape_server::service::ReportService;
use dreamscape_server::state::AppState;

pub const CLIENT_TEMPLATE: &str = r#"<html><head></head><body><img src="banner.png"><h1>{{name}}</h1><main>{{{clientReport}}}</main></body></html>"#;
pub const PRACTITIONER_TEMPLATE: &str = r#"<html><head></head><body><img src="banner.png"><h1>Case: {{name}}</h1><main>{{{practitionerReport}}}</main></body></html>"#;

/// Model fake: records prompts, answers by report type, optionally fails.
pub struct FakeModel {
    pub prompts: Mutex<Vec<String>>,
    pub fail_on: Option<&'static str>,
    pub barrier: Option<Barrier>,
}

impl FakeModel {
    pub fn ok() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_on: None,
            barrier: None,
        }
    }

    /// Fail any call whose prompt contains `marker`.
    pub fn failing_on(marker: &'static str) -> Self {
        Self {
            fail_on: Some(marker),
            ..Self::ok()
        }
    }

    /// Both calls must be in flight at once before either returns.
    pub fn concurrent() -> Self {
        Self {
            barrier: Some(Barrier::new(2)),
            ..Self::ok()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for FakeModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(marker) = self.fail_on
            && prompt.contains(marker)
        {
            return Err(LlmError::Invocation("upstream unavailable".to_string()));
        }
        if prompt.contains("Practitioner Case Report") {
            Ok("## Client Summary\n**Jane** is ready.\n\n\n4. 12-Week Milestone Table\n\n<table><tr><td>M1</td></tr>\n</table>\n\n5. Practitioner Notes".to_string())
        } else {
            Ok("**Welcome** Jane\n- insight one\n- insight two".to_string())
        }
    }

    fn model_id(&self) -> &str {
        "fake-model"
    }
}

/// PDF fake: wraps the HTML it was given so tests can inspect it on disk.
#[derive(Default)]
pub struct FakePdf;

#[async_trait]
impl PdfRenderer for FakePdf {
    async fn render_pdf(&self, html: &str, _format: PageFormat) -> Result<Vec<u8>, ExportError> {
        Ok(format!("%PDF-fake\n{html}").into_bytes())
    }
}

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        std::fs::create_dir_all(&templates).unwrap();
        std::fs::write(templates.join("client.html"), CLIENT_TEMPLATE).unwrap();
        std::fs::write(templates.join("practitioner.html"), PRACTITIONER_TEMPLATE).unwrap();
        std::fs::write(dir.path().join("banner.png"), b"\x89PNG fake").unwrap();
        std::fs::create_dir_all(dir.path().join("pdfs")).unwrap();
        Self { dir }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.dir.path().join("templates")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("pdfs")
    }

    pub fn output(&self, file: &str) -> PathBuf {
        self.output_dir().join(file)
    }

    pub fn service(&self, model: Arc<FakeModel>) -> ReportService {
        let renderer = ReportRenderer::new(
            Arc::new(FakePdf),
            self.dir.path().join("banner.png"),
            PageFormat::A4,
        );
        ReportService::new(model, renderer, self.templates_dir(), self.output_dir())
    }

    pub fn state(&self, model: Arc<FakeModel>) -> AppState {
        AppState {
            service: Arc::new(self.service(model)),
        }
    }

    pub fn output_files(&self) -> Vec<String> {
        list_files(&self.output_dir())
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn submission(name: &str) -> ReportSubmission {
    ReportSubmission {
        name: Some(name.to_string()),
        questions: Some((1..=5).map(|i| format!("Question {i}?")).collect()),
        answers: Some((1..=5).map(|i| format!("Answer {i}.")).collect()),
    }
}
