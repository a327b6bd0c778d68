//! Roster lookup by normalized name
//!
//! Resolution order for a free-text manager reference: exact normalized
//! name, then best token-overlap match, otherwise unresolved.

use super::matcher::find_best_match;
use super::normalize::normalize;
use crate::graph::EmployeeRecord;
use indexmap::IndexMap;
use tracing::debug;

/// How a name reference was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Records keyed by normalized name, in first-seen order
///
/// A later record with the same normalized name replaces the earlier one
/// but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_name: IndexMap<String, EmployeeRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut roster = Roster::new();
        for record in records {
            roster.insert(record.clone());
        }
        roster
    }

    pub fn insert(&mut self, record: EmployeeRecord) {
        self.by_name.insert(record.normalized_name(), record);
    }

    /// Register a record under an explicit key (placeholders use the reference)
    pub fn insert_as(&mut self, key: String, record: EmployeeRecord) {
        self.by_name.insert(key, record);
    }

    pub fn get(&self, normalized: &str) -> Option<&EmployeeRecord> {
        self.by_name.get(normalized)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.by_name.contains_key(normalized)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Exact lookup, falling back to the best fuzzy match among `candidates`
    pub fn resolve(&self, reference: &str, candidates: &[EmployeeRecord]) -> Option<(EmployeeRecord, MatchKind)> {
        if let Some(found) = self.get(&normalize(reference)) {
            return Some((found.clone(), MatchKind::Exact));
        }
        let found = find_best_match(reference, candidates)?;
        debug!("Fuzzy-matched manager reference '{}' to '{}'", reference, found.name);
        Some((found.clone(), MatchKind::Fuzzy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str) -> EmployeeRecord {
        EmployeeRecord::new(name, "Ops", "Clerk", "Paris", "")
    }

    #[test]
    fn test_exact_then_fuzzy() {
        let records = vec![emp("John Smith"), emp("Mary Ann Lee")];
        let roster = Roster::from_records(&records);

        let (found, kind) = roster.resolve("smith john", &records).unwrap();
        assert_eq!(found.name, "John Smith");
        assert_eq!(kind, MatchKind::Exact);

        // 3 of 4 tokens
        let (found, kind) = roster.resolve("Mary Ann Lee Jr", &records).unwrap();
        assert_eq!(found.name, "Mary Ann Lee");
        assert_eq!(kind, MatchKind::Fuzzy);

        assert!(roster.resolve("Nobody Here", &records).is_none());
    }

    #[test]
    fn test_later_duplicate_replaces_in_place() {
        let records = vec![emp("Ann"), emp("Bob"), emp("ann").with_employee_id("2")];
        let roster = Roster::from_records(&records);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ann").unwrap().employee_id.as_deref(), Some("2"));
    }
}
