//! Manager index
//!
//! Groups every record that names a manager under the resolved manager's
//! identity. References are resolved exactly, then fuzzily, and finally
//! by synthesizing a placeholder record that later references reuse.

use crate::graph::EmployeeRecord;
use crate::matching::{normalize, MatchKind, Roster};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A manager and the records that report to them
#[derive(Debug, Clone)]
pub struct ManagerEntry {
    pub manager: EmployeeRecord,
    /// Direct reports in input order
    pub reports: Vec<EmployeeRecord>,
}

impl ManagerEntry {
    pub fn report_count(&self) -> usize {
        self.reports.len()
    }
}

/// Managers keyed by normalized name, in first-referenced order
#[derive(Debug, Clone, Default)]
pub struct ManagerIndex {
    entries: IndexMap<String, ManagerEntry>,
    /// Normalized reference text → key of the entry it resolved to
    aliases: FxHashMap<String, String>,
    placeholders: usize,
    /// References that only resolved through the fuzzy matcher
    fuzzy_matches: usize,
}

impl ManagerIndex {
    /// Index the manager references of `employees`
    pub fn build(employees: &[EmployeeRecord], department: &str) -> Self {
        let mut roster = Roster::from_records(employees);
        let mut index = ManagerIndex::default();

        for employee in employees.iter().filter(|e| e.has_manager()) {
            let reference = employee.reporting_manager.as_str();
            let reference_key = normalize(reference);

            let manager = match roster.resolve(reference, employees) {
                Some((found, MatchKind::Exact)) => found,
                Some((found, MatchKind::Fuzzy)) => {
                    debug!("Reference '{}' in {} resolved fuzzily to '{}'", reference, department, found.name);
                    index.fuzzy_matches += 1;
                    found
                }
                None => {
                    debug!(
                        "Manager '{}' not on the {} roster, using a placeholder",
                        reference, department
                    );
                    let placeholder = EmployeeRecord::placeholder_manager(reference.trim(), department);
                    roster.insert_as(reference_key.clone(), placeholder.clone());
                    index.placeholders += 1;
                    placeholder
                }
            };

            let key = manager.normalized_name();
            index
                .entries
                .entry(key.clone())
                .or_insert_with(|| ManagerEntry { manager, reports: Vec::new() })
                .reports
                .push(employee.clone());
            index.aliases.insert(reference_key, key);
        }

        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of placeholder managers synthesized during the build
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Number of references resolved by fuzzy matching
    pub fn fuzzy_count(&self) -> usize {
        self.fuzzy_matches
    }

    pub fn get(&self, key: &str) -> Option<&ManagerEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ManagerEntry)> {
        self.entries.iter()
    }

    /// Key of the entry a name or reference refers to
    ///
    /// Tries the normalized text as a key first, then as a reference that
    /// was resolved while indexing.
    pub fn key_for(&self, name: &str) -> Option<&str> {
        let normalized = normalize(name);
        if let Some((key, _)) = self.entries.get_key_value(&normalized) {
            return Some(key.as_str());
        }
        self.aliases
            .get(&normalized)
            .filter(|key| self.entries.contains_key(key.as_str()))
            .map(String::as_str)
    }

    /// Entry a name or reference refers to
    pub fn lookup(&self, name: &str) -> Option<&ManagerEntry> {
        self.key_for(name).and_then(|key| self.entries.get(key))
    }

    /// Manager records in index order
    pub fn managers(&self) -> Vec<&EmployeeRecord> {
        self.entries.values().map(|e| &e.manager).collect()
    }
}

/// Build the manager index for one department's records
pub fn build_manager_structure(employees: &[EmployeeRecord], department: &str) -> ManagerIndex {
    ManagerIndex::build(employees, department)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str, manager: &str) -> EmployeeRecord {
        EmployeeRecord::new(name, "Ops", "JC0001 Clerk", "Paris", manager)
    }

    #[test]
    fn test_groups_reports_under_manager() {
        let employees = vec![emp("Alice", ""), emp("Bob", "Alice"), emp("Carol", "Alice"), emp("Dan", "Bob")];
        let index = build_manager_structure(&employees, "Ops");

        assert_eq!(index.len(), 2);
        let keys: Vec<&String> = index.keys().collect();
        assert_eq!(keys, vec!["alice", "bob"]);

        let alice = index.get("alice").unwrap();
        assert_eq!(alice.manager.name, "Alice");
        let names: Vec<&str> = alice.reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
        assert_eq!(index.placeholder_count(), 0);
        assert_eq!(index.fuzzy_count(), 0);
    }

    #[test]
    fn test_reordered_reference_resolves_exactly() {
        let employees = vec![emp("John Smith", ""), emp("Ann", "Smith, John")];
        let index = build_manager_structure(&employees, "Ops");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("john smith").unwrap().manager.name, "John Smith");
    }

    #[test]
    fn test_fuzzy_reference_uses_roster_record() {
        let employees = vec![emp("Mary Ann Lee", ""), emp("Ann", "Mary Ann Lee Jr")];
        let index = build_manager_structure(&employees, "Ops");
        assert_eq!(index.len(), 1);
        assert!(index.contains("ann lee mary"));
        assert_eq!(index.key_for("Mary Ann Lee Jr"), Some("ann lee mary"));
        assert_eq!(index.fuzzy_count(), 1);
        assert_eq!(index.placeholder_count(), 0);
    }

    #[test]
    fn test_placeholder_is_shared_by_later_references() {
        let employees = vec![emp("Ann", "Ghost Boss"), emp("Bea", "ghost boss")];
        let index = build_manager_structure(&employees, "Ops");

        assert_eq!(index.len(), 1);
        assert_eq!(index.placeholder_count(), 1);
        let entry = index.get("boss ghost").unwrap();
        assert!(entry.manager.is_placeholder());
        assert_eq!(entry.manager.department, "Ops");
        assert_eq!(entry.report_count(), 2);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let employees = vec![emp("Alice", ""), emp("Bob", "Alice")];
        let index = build_manager_structure(&employees, "Ops");
        assert!(index.lookup("Zed").is_none());
        assert!(index.lookup("ALICE").is_some());
    }
}
