use async_trait::async_trait;
use license_audit::prelude::*;

/// Mock LicenseSource for testing that returns fixed records
pub struct MockLicenseSource {
    records: Vec<DependencyRecord>,
    should_fail: bool,
}

impl MockLicenseSource {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_dependency(mut self, name: &str, version: &str, license: Option<&str>) -> Self {
        let mut record = DependencyRecord::new(name.to_string(), version.to_string()).unwrap();
        if let Some(license) = license {
            record = record.with_license(license);
        }
        self.records.push(record);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LicenseSource for MockLicenseSource {
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock cargo-license failure");
        }
        Ok(self.records.clone())
    }
}
