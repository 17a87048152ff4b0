use std::collections::BTreeMap;

/// Violation counts keyed by the exact license string
///
/// Every stored count is at least one. Iteration is sorted by license
/// string so two runs over the same violations produce the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseStats {
    counts: BTreeMap<String, usize>,
}

impl LicenseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one violation for `license`
    pub fn increment(&mut self, license: &str) {
        *self.counts.entry(license.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, license: &str) -> Option<usize> {
        self.counts.get(license).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct licenses
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
