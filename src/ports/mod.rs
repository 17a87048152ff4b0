/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the audit core uses to reach the
/// license listing tool, the collaboration platform and the log.
pub mod outbound;
