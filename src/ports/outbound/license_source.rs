use crate::license_compliance::domain::DependencyRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseSource port for obtaining the resolved dependency licenses
///
/// Implementations hide where the listing comes from (running
/// `cargo license`, a pre-generated JSON file) and which output shape the
/// tool version produced. They always return records in listing order.
#[async_trait]
pub trait LicenseSource: Send + Sync {
    /// Lists every resolved dependency with its license metadata
    ///
    /// # Errors
    /// Returns an error if the listing cannot be produced or parsed.
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>>;
}

#[async_trait]
impl<S: LicenseSource + ?Sized> LicenseSource for Box<S> {
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        (**self).list_dependencies().await
    }
}
