//! Report generation orchestration.
//!
//! validate → build prompts → two concurrent model calls → sanitize and bind
//! both templates → render both PDFs. Any failure after validation fails the
//! whole request. Nothing is written until both templates are bound; a render
//! failure on the second report leaves the first PDF in place.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use dreamscape_core::error::CoreError;
use dreamscape_core::models::report::ReportKind;
use dreamscape_core::models::request::{ReportRequest, ReportSubmission};
use dreamscape_core::prompts::build_prompts;
use dreamscape_export::error::ExportError;
use dreamscape_export::pdf::ReportRenderer;
use dreamscape_export::render::{bind, load_template};
use dreamscape_export::sanitize::sanitize;
use dreamscape_llm::CompletionModel;
use dreamscape_llm::error::LlmError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Model(#[from] LlmError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Paths of the two PDFs written for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReports {
    pub client: PathBuf,
    pub practitioner: PathBuf,
}

pub struct ReportService {
    model: Arc<dyn CompletionModel>,
    renderer: ReportRenderer,
    templates_dir: PathBuf,
    output_dir: PathBuf,
}

impl ReportService {
    pub fn new(
        model: Arc<dyn CompletionModel>,
        renderer: ReportRenderer,
        templates_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            model,
            renderer,
            templates_dir: templates_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Validate a submission and produce both reports.
    ///
    /// Nothing external is touched when validation fails.
    pub async fn generate(&self, submission: ReportSubmission) -> Result<GeneratedReports, ServiceError> {
        let request = submission.validate()?;
        self.generate_validated(&request).await
    }

    pub async fn generate_validated(
        &self,
        request: &ReportRequest,
    ) -> Result<GeneratedReports, ServiceError> {
        let safe_name = request.safe_name();
        info!(safe_name = %safe_name, "request validated");

        let prompts = build_prompts(request);
        info!(
            safe_name = %safe_name,
            model = self.model.model_id(),
            client_prompt_chars = prompts.client.len(),
            practitioner_prompt_chars = prompts.practitioner.len(),
            "prompts built"
        );

        let (client_text, practitioner_text) = tokio::try_join!(
            self.model.complete(&prompts.client),
            self.model.complete(&prompts.practitioner),
        )?;
        info!(
            safe_name = %safe_name,
            client_chars = client_text.len(),
            practitioner_chars = practitioner_text.len(),
            "model responses received"
        );

        let client_html = self
            .bind_report(ReportKind::Client, request.name(), &client_text)
            .await?;
        let practitioner_html = self
            .bind_report(ReportKind::Practitioner, request.name(), &practitioner_text)
            .await?;
        info!(safe_name = %safe_name, "templates bound");

        let client = self
            .render_report(ReportKind::Client, &safe_name, &client_html)
            .await?;
        let practitioner = self
            .render_report(ReportKind::Practitioner, &safe_name, &practitioner_html)
            .await?;

        info!(safe_name = %safe_name, "reports completed");
        Ok(GeneratedReports {
            client,
            practitioner,
        })
    }

    /// Sanitize a model draft and merge it into the kind's template.
    async fn bind_report(
        &self,
        kind: ReportKind,
        name: &str,
        raw: &str,
    ) -> Result<String, ServiceError> {
        let fragment = sanitize(raw);
        let template_path = self.templates_dir.join(kind.template_file());
        let template = load_template(&template_path).await?;
        Ok(bind(&template, kind.report_placeholder(), name, &fragment))
    }

    async fn render_report(
        &self,
        kind: ReportKind,
        safe_name: &str,
        html: &str,
    ) -> Result<PathBuf, ServiceError> {
        // output_file never yields a separator, so this stays under output_dir.
        let output = self.output_dir.join(kind.output_file(safe_name));
        self.renderer.render(html, &output).await?;

        info!(%kind, path = %output.display(), "report rendered");
        Ok(output)
    }
}
