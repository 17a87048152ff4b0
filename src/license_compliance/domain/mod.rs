pub mod audit_outcome;
pub mod dependency;
pub mod license_stats;
pub mod reporting_context;
pub mod violation_set;

pub use audit_outcome::{AuditOutcome, IssueOutcome, ReportChannel, Verdict};
pub use dependency::DependencyRecord;
pub use license_stats::LicenseStats;
pub use reporting_context::{ReportingContext, RepositoryRef, Trigger};
pub use violation_set::ViolationSet;
