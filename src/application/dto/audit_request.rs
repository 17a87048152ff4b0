use crate::license_compliance::policies::DenyList;

/// AuditRequest - Request DTO for the license audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// License substrings that make a dependency a violation
    pub deny_list: DenyList,
}

impl AuditRequest {
    pub fn new(deny_list: DenyList) -> Self {
        Self { deny_list }
    }
}
