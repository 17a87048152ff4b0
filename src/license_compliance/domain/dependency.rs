use crate::shared::error::AuditError;
use crate::shared::Result;

/// One resolved dependency as reported by the license listing tool
///
/// Records are created once per run and never mutated afterwards.
/// A missing `license` means the tool could not determine one; such a
/// record can never be a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    name: String,
    version: String,
    authors: String,
    repository: Option<String>,
    description: Option<String>,
    license_file: Option<String>,
    license: Option<String>,
}

impl DependencyRecord {
    /// Creates a record with the required fields only
    ///
    /// # Errors
    /// Returns a validation error if `name` is empty or only whitespace.
    pub fn new(name: String, version: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AuditError::Validation {
                message: "Dependency name cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            name,
            version,
            authors: String::new(),
            repository: None,
            description: None,
            license_file: None,
            license: None,
        })
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_license_file(mut self, license_file: impl Into<String>) -> Self {
        self.license_file = Some(license_file.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license_file(&self) -> Option<&str> {
        self.license_file.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }
}
