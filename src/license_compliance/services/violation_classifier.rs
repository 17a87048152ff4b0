use crate::license_compliance::domain::{DependencyRecord, ViolationSet};
use crate::license_compliance::policies::DenyList;

/// ViolationClassifier service for flagging dependencies against the deny-list
///
/// Matching is substring containment on the raw license text, not a license
/// expression evaluation: `MIT OR GPL-3.0` is flagged by `GPL` even though
/// the MIT alternative would be acceptable. Compound expressions are matched
/// exactly as the upstream tool printed them.
pub struct ViolationClassifier;

impl ViolationClassifier {
    /// Returns the records whose license contains at least one deny-list entry
    ///
    /// The result keeps the input order and holds each record at most once,
    /// however many entries match it. Records without a license never match.
    pub fn classify(records: &[DependencyRecord], deny_list: &DenyList) -> ViolationSet {
        if deny_list.is_empty() {
            return ViolationSet::default();
        }

        let violations = records
            .iter()
            .filter(|record| {
                record
                    .license()
                    .and_then(|license| deny_list.first_match(license))
                    .is_some()
            })
            .cloned()
            .collect();

        ViolationSet::new(violations)
    }
}
