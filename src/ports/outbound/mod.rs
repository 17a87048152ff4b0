/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cargo-license, GitHub, console).
pub mod action_logger;
pub mod check_run;
pub mod dedup_gate;
pub mod issue_tracker;
pub mod license_source;
pub mod report_renderer;

pub use action_logger::ActionLogger;
pub use check_run::{CheckConclusion, CheckOutput, CheckRunFactory, CheckRunHandle, CheckStatus};
pub use dedup_gate::DedupGate;
pub use issue_tracker::{CreatedIssue, IssueTracker, NewIssue, SearchResult};
pub use license_source::LicenseSource;
pub use report_renderer::ReportRenderer;
