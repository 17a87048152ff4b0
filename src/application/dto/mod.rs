/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI entry point and the use cases,
/// keeping the domain layer isolated.
mod audit_request;
mod audit_response;

pub use audit_request::AuditRequest;
pub use audit_response::AuditResponse;
