use std::fmt;

/// The two narrative reports produced for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Client-facing reflection.
    Client,
    /// Practitioner case report.
    Practitioner,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Client => "client",
            ReportKind::Practitioner => "practitioner",
        }
    }

    /// Template file name, relative to the templates directory.
    pub fn template_file(self) -> &'static str {
        match self {
            ReportKind::Client => "client.html",
            ReportKind::Practitioner => "practitioner.html",
        }
    }

    /// Token in the template that receives the sanitized report body.
    pub fn report_placeholder(self) -> &'static str {
        match self {
            ReportKind::Client => "{{{clientReport}}}",
            ReportKind::Practitioner => "{{{practitionerReport}}}",
        }
    }

    /// Output file name: `{safe_name}_{kind}.pdf`.
    ///
    /// Path separators in the name become underscores so the result is always
    /// a bare file name.
    pub fn output_file(self, safe_name: &str) -> String {
        let stem = safe_name.replace(['/', '\\'], "_");
        format!("{stem}_{}.pdf", self.as_str())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token replaced by the request name in every template.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Trim the name and replace each internal whitespace run with one underscore.
pub fn safe_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}
