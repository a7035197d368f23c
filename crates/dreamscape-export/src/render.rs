use std::path::Path;

use dreamscape_core::models::report::NAME_PLACEHOLDER;

use crate::error::ExportError;

/// Read a UTF-8 HTML template from disk.
pub async fn load_template(path: &Path) -> Result<String, ExportError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExportError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Fill a template with the request name and a sanitized report body.
///
/// Every `{{name}}` receives the name verbatim; only the first occurrence
/// of `report_token` receives `report_html`. Neither value is escaped: the
/// report body is markup, and the name is inserted as-is.
pub fn bind(template: &str, report_token: &str, name: &str, report_html: &str) -> String {
    template
        .replace(NAME_PLACEHOLDER, name)
        .replacen(report_token, report_html, 1)
}
