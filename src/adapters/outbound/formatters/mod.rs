/// Formatter adapters for license reports
mod markdown_report_renderer;

pub use markdown_report_renderer::MarkdownReportRenderer;
