mod license_statistics;
mod violation_classifier;

pub use license_statistics::LicenseStatistics;
pub use violation_classifier::ViolationClassifier;
