use crate::license_compliance::domain::DependencyRecord;
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of `cargo license --json`
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    version: String,
    #[serde(default)]
    authors: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license_file: Option<String>,
    #[serde(default)]
    license: Option<String>,
}

/// Either a flat array of records or records grouped by category
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawListing {
    Flat(Vec<RawRecord>),
    Categorized(BTreeMap<String, Vec<RawRecord>>),
}

impl RawListing {
    /// Flattens categories in key order, keeping record order inside each
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            RawListing::Flat(records) => records,
            RawListing::Categorized(groups) => groups.into_values().flatten().collect(),
        }
    }
}

impl RawRecord {
    fn into_dependency(self) -> Result<DependencyRecord> {
        let mut record = DependencyRecord::new(self.name, self.version)?;
        if let Some(authors) = self.authors {
            record = record.with_authors(authors);
        }
        if let Some(repository) = self.repository {
            record = record.with_repository(repository);
        }
        if let Some(description) = self.description {
            record = record.with_description(description);
        }
        if let Some(license_file) = self.license_file {
            record = record.with_license_file(license_file);
        }
        if let Some(license) = self.license {
            record = record.with_license(license);
        }
        Ok(record)
    }
}

/// Parses cargo-license JSON output into dependency records in listing order
///
/// # Arguments
/// * `content` - JSON text
/// * `source_name` - Where the text came from, used in error messages
pub fn parse_listing(content: &str, source_name: &str) -> Result<Vec<DependencyRecord>> {
    let listing: RawListing =
        serde_json::from_str(content).map_err(|e| AuditError::ListingParseError {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })?;

    listing
        .into_records()
        .into_iter()
        .map(|raw| {
            raw.into_dependency()
                .map_err(|e| AuditError::ListingParseError {
                    source_name: source_name.to_string(),
                    details: e.to_string(),
                })
                .map_err(anyhow::Error::from)
        })
        .collect()
}
