/// Use cases module containing application business logic orchestration
mod audit_licenses;
mod report_violations;

pub use audit_licenses::AuditLicensesUseCase;
pub use report_violations::{ReportViolationsUseCase, DEFAULT_CHECK_NAME};
