use crate::license_compliance::domain::{DependencyRecord, ViolationSet};
use crate::ports::outbound::ReportRenderer;

/// Header of the per-dependency details table
const DETAILS_HEADER: &str = "| Details      |                                                |\n";

/// Separator line of the per-dependency details table
const DETAILS_SEPARATOR: &str = "| ------------ | ---------------------------------------------- |\n";

/// Placeholder for a dependency without a detected license
const UNKNOWN_LICENSE: &str = "unknown";

/// MarkdownReportRenderer adapter for check run bodies, inline reports and issue bodies
///
/// Field values are interpolated as-is. An empty violation set renders to
/// an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_row(output: &mut String, label: &str, value: &str) {
        output.push_str(&format!("| {:<12} | {} |\n", label, value));
    }

    /// Adds a row only when the value is present and non-empty
    fn render_optional_row(output: &mut String, label: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            Self::render_row(output, label, value);
        }
    }

    fn render_dependency(output: &mut String, dependency: &DependencyRecord) {
        output.push_str(&format!(
            "### {} {}\n\n",
            dependency.name(),
            dependency.version()
        ));

        output.push_str(DETAILS_HEADER);
        output.push_str(DETAILS_SEPARATOR);
        Self::render_row(output, "Package", &format!("`{}`", dependency.name()));
        Self::render_row(output, "Version", &format!("`{}`", dependency.version()));
        Self::render_row(
            output,
            "License",
            dependency.license().unwrap_or(UNKNOWN_LICENSE),
        );
        Self::render_optional_row(output, "Authors", Some(dependency.authors()));
        Self::render_optional_row(output, "Repository", dependency.repository());
        Self::render_optional_row(output, "License file", dependency.license_file());
        output.push('\n');

        if let Some(description) = dependency.description().filter(|d| !d.trim().is_empty()) {
            output.push_str(description);
            output.push_str("\n\n");
        }
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render_report(&self, violations: &ViolationSet) -> String {
        if violations.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str("## License violations\n\n");
        for dependency in violations {
            Self::render_dependency(&mut output, dependency);
        }
        output
    }

    fn render_issue_body(&self, dependency: &DependencyRecord) -> String {
        format!(
            "> {} ({}) - {}\n",
            dependency.name(),
            dependency.version(),
            dependency.license().unwrap_or(UNKNOWN_LICENSE)
        )
    }
}
