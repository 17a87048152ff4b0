use crate::license_compliance::domain::{DependencyRecord, ViolationSet};

/// ReportRenderer port for turning findings into human-readable text
///
/// Renderers are pure: the same input always yields the same output.
pub trait ReportRenderer: Send + Sync {
    /// Renders the full report for a check run body or the inline log
    fn render_report(&self, violations: &ViolationSet) -> String;

    /// Renders the body of the issue opened for one dependency
    fn render_issue_body(&self, dependency: &DependencyRecord) -> String;
}
