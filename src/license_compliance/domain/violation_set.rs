use super::DependencyRecord;

/// Ordered sequence of dependencies flagged by the deny-list
///
/// Order is the scan order of the source listing. An empty set is the
/// all-clear state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationSet {
    records: Vec<DependencyRecord>,
}

impl ViolationSet {
    pub fn new(records: Vec<DependencyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DependencyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ViolationSet {
    type Item = &'a DependencyRecord;
    type IntoIter = std::slice::Iter<'a, DependencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
