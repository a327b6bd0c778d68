//! Chain of command and summary statistics

use super::manager_index::ManagerIndex;
use crate::graph::EmployeeRecord;
use crate::matching::Roster;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Managers above `start`, nearest first
///
/// Each step resolves the current record's manager reference exactly, then
/// fuzzily against `candidates`. With `placeholder_department` set, an
/// unresolved reference becomes a placeholder manager and ends the walk;
/// without it the walk stops at the last resolved record. A name seen twice
/// ends the walk.
pub fn walk_chain(
    start: &EmployeeRecord,
    roster: &Roster,
    candidates: &[EmployeeRecord],
    placeholder_department: Option<&str>,
) -> Vec<EmployeeRecord> {
    let mut chain = Vec::new();
    let mut seen = FxHashSet::default();
    seen.insert(start.normalized_name());

    let mut current = start.clone();
    while current.has_manager() {
        let reference = current.reporting_manager.clone();
        let upper = match roster.resolve(&reference, candidates) {
            Some((found, _)) => found,
            None => match placeholder_department {
                Some(department) => EmployeeRecord::placeholder_manager(reference.trim(), department),
                None => break,
            },
        };

        if !seen.insert(upper.normalized_name()) {
            warn!("Reporting cycle through '{}' stopped the chain of command", upper.name);
            break;
        }
        chain.push(upper.clone());
        current = upper;
    }

    chain
}

/// Managers above `employee` within `employees`, nearest first
pub fn managers_above(employee: &EmployeeRecord, employees: &[EmployeeRecord]) -> Vec<EmployeeRecord> {
    let roster = Roster::from_records(employees);
    walk_chain(employee, &roster, employees, None)
}

/// Headline numbers for the current selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_employees: usize,
    pub total_managers: usize,
    /// Set when a manager is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_reports: Option<usize>,
    /// Management levels above the selected manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels_above: Option<usize>,
}

impl SummaryStats {
    /// Stats for a filtered record set, optionally focused on one manager
    ///
    /// Levels above are counted through the manager index only: a manager
    /// whose own manager never manages anyone in scope has zero levels.
    pub fn compute(employees: &[EmployeeRecord], index: &ManagerIndex, selected_manager: Option<&str>) -> Self {
        let mut stats = SummaryStats {
            total_employees: employees.len(),
            total_managers: index.len(),
            direct_reports: None,
            levels_above: None,
        };

        let Some(name) = selected_manager else {
            return stats;
        };
        let Some(key) = index.key_for(name) else {
            return stats;
        };
        let Some(entry) = index.get(key) else {
            return stats;
        };

        stats.direct_reports = Some(entry.report_count());

        let mut levels = 0;
        let mut seen = FxHashSet::default();
        seen.insert(key.to_string());
        let mut current = entry;
        while current.manager.has_manager() {
            let Some(upper_key) = index.key_for(&current.manager.reporting_manager) else {
                break;
            };
            if !seen.insert(upper_key.to_string()) {
                break;
            }
            let Some(upper) = index.get(upper_key) else {
                break;
            };
            levels += 1;
            current = upper;
        }
        stats.levels_above = Some(levels);

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::manager_index::build_manager_structure;

    fn emp(name: &str, manager: &str) -> EmployeeRecord {
        EmployeeRecord::new(name, "Ops", "JC0001 Clerk", "Paris", manager)
    }

    fn chain_fixture() -> Vec<EmployeeRecord> {
        vec![emp("Alice", ""), emp("Bob", "Alice"), emp("Carol", "Bob"), emp("Dan", "Carol")]
    }

    #[test]
    fn test_managers_above_nearest_first() {
        let employees = chain_fixture();
        let above = managers_above(&employees[3], &employees);
        let names: Vec<&str> = above.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
    }

    #[test]
    fn test_managers_above_stops_when_unresolved() {
        let employees = vec![emp("Ann", "Nobody Known"), emp("Bea", "Ann")];
        let above = managers_above(&employees[1], &employees);
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].name, "Ann");
    }

    #[test]
    fn test_placeholder_ends_chain() {
        let employees = vec![emp("Ann", "Nobody Known")];
        let roster = Roster::from_records(&employees);
        let above = walk_chain(&employees[0], &roster, &employees, Some("Ops"));
        assert_eq!(above.len(), 1);
        assert!(above[0].is_placeholder());
    }

    #[test]
    fn test_cycle_terminates() {
        let employees = vec![emp("Ann", "Bea"), emp("Bea", "Cid"), emp("Cid", "Ann")];
        let above = managers_above(&employees[0], &employees);
        let names: Vec<&str> = above.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Cid"]);
    }

    #[test]
    fn test_summary_without_selection() {
        let employees = chain_fixture();
        let index = build_manager_structure(&employees, "Ops");
        let stats = SummaryStats::compute(&employees, &index, None);
        assert_eq!(stats.total_employees, 4);
        assert_eq!(stats.total_managers, 3);
        assert_eq!(stats.direct_reports, None);
        assert_eq!(stats.levels_above, None);
    }

    #[test]
    fn test_summary_for_selected_manager() {
        let employees = chain_fixture();
        let index = build_manager_structure(&employees, "Ops");

        let stats = SummaryStats::compute(&employees, &index, Some("Carol"));
        assert_eq!(stats.direct_reports, Some(1));
        assert_eq!(stats.levels_above, Some(2));

        let stats = SummaryStats::compute(&employees, &index, Some("Alice"));
        assert_eq!(stats.levels_above, Some(0));
    }
}
