use crate::license_compliance::domain::ViolationSet;

/// AuditResponse - Response DTO from the license audit use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// Number of dependencies in the listing
    pub dependencies_scanned: usize,
    /// Dependencies matching the deny-list, in listing order
    pub violations: ViolationSet,
}

impl AuditResponse {
    pub fn new(dependencies_scanned: usize, violations: ViolationSet) -> Self {
        Self {
            dependencies_scanned,
            violations,
        }
    }
}
