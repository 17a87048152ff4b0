use crate::adapters::outbound::cargo::parse_listing;
use crate::license_compliance::domain::DependencyRecord;
use crate::ports::outbound::LicenseSource;
use crate::shared::security::{read_regular_file, MAX_LISTING_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// ListingFileSource adapter reading a pre-generated `cargo license --json` file
///
/// Lets the audit run without cargo-license installed, e.g. when the
/// listing was produced by an earlier workflow step.
pub struct ListingFileSource {
    path: PathBuf,
}

impl ListingFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl LicenseSource for ListingFileSource {
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        let content = read_regular_file(&self.path, "license listing", MAX_LISTING_FILE_SIZE)?;
        parse_listing(&content, &self.path.display().to_string())
    }
}
