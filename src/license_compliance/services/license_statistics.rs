use crate::license_compliance::domain::{LicenseStats, ViolationSet};

/// LicenseStatistics service for counting violations per license
///
/// Licenses are keyed by their exact text; `MIT OR GPL-3.0` and `GPL-3.0`
/// are separate entries.
pub struct LicenseStatistics;

impl LicenseStatistics {
    /// Counts violations by license string
    ///
    /// A violation without a license cannot come out of the classifier; if one
    /// is passed anyway it is skipped.
    pub fn aggregate(violations: &ViolationSet) -> LicenseStats {
        let mut stats = LicenseStats::new();
        for license in violations.iter().filter_map(|d| d.license()) {
            stats.increment(license);
        }
        stats
    }

    /// Renders `<license> <count> violations` entries joined by `, `
    ///
    /// Meant for log lines and the check-run summary.
    pub fn summarize(stats: &LicenseStats) -> String {
        stats
            .iter()
            .map(|(license, count)| format!("{} {} violations", license, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
