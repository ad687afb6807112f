use crate::error::CoherenceError;
use crate::model::PackageRecord;
use coherence_types::PackageId;
use std::collections::HashMap;

/// Immutable-after-construction mapping from package identifier to record.
///
/// Records keep their input order for iteration; lookup is keyed by the
/// case-insensitive id.
#[derive(Debug, Default)]
pub struct PackageUniverse {
    records: Vec<PackageRecord>,
    lookup: HashMap<PackageId, usize>,
}

impl PackageUniverse {
    /// Builds the universe. A duplicate identifier fails the whole
    /// construction, naming both colliding records.
    pub fn build(records: Vec<PackageRecord>) -> Result<Self, CoherenceError> {
        let mut lookup: HashMap<PackageId, usize> = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(&existing) = lookup.get(&record.identity.id) {
                return Err(CoherenceError::DuplicateIdentity {
                    first: records[existing].identity.clone(),
                    second: record.identity.clone(),
                });
            }
            lookup.insert(record.identity.id.clone(), index);
        }
        Ok(Self { records, lookup })
    }

    /// Lookup by id. A miss is not an error: the dependency is simply outside
    /// the universe.
    pub fn get(&self, id: &PackageId) -> Option<&PackageRecord> {
        self.lookup.get(id).map(|&index| &self.records[index])
    }

    /// Records in input order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
