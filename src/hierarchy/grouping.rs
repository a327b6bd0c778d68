//! Location and job-role grouping of direct reports

use crate::graph::EmployeeRecord;
use indexmap::IndexMap;

/// Group label for records without a location
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Group label for records without a job title
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// Number of leading characters dropped from job titles for display
///
/// Source job titles carry a fixed-width job-code prefix
/// ("JC1042 Engineer"); only the remainder is shown.
pub const JOB_CODE_PREFIX_LEN: usize = 7;

/// Display label of a job title
///
/// Titles longer than the job-code prefix lose their first seven
/// characters; shorter titles are shown as is.
pub fn job_role_label(job_title: &str) -> String {
    if job_title.trim().is_empty() {
        return UNKNOWN_ROLE.to_string();
    }
    if job_title.chars().count() > JOB_CODE_PREFIX_LEN {
        job_title.chars().skip(JOB_CODE_PREFIX_LEN).collect()
    } else {
        job_title.to_string()
    }
}

/// Location label of a record
pub fn location_label(record: &EmployeeRecord) -> String {
    if record.location.trim().is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        record.location.clone()
    }
}

/// Records grouped by location, groups in first-seen order
pub fn group_by_location(records: &[EmployeeRecord]) -> IndexMap<String, Vec<EmployeeRecord>> {
    let mut groups: IndexMap<String, Vec<EmployeeRecord>> = IndexMap::new();
    for record in records {
        groups.entry(location_label(record)).or_default().push(record.clone());
    }
    groups
}

/// Records grouped by job-role label, groups in first-seen order
pub fn group_by_job_role(records: &[EmployeeRecord]) -> IndexMap<String, Vec<EmployeeRecord>> {
    let mut groups: IndexMap<String, Vec<EmployeeRecord>> = IndexMap::new();
    for record in records {
        groups.entry(job_role_label(&record.job_title)).or_default().push(record.clone());
    }
    groups
}

/// Distinct non-empty values of `field`, in first-seen order
pub fn distinct_values<F>(records: &[EmployeeRecord], field: F) -> Vec<String>
where
    F: Fn(&EmployeeRecord) -> &str,
{
    let mut seen: IndexMap<String, ()> = IndexMap::new();
    for record in records {
        let value = field(record);
        if !value.trim().is_empty() {
            seen.entry(value.to_string()).or_insert(());
        }
    }
    seen.into_keys().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str, title: &str, location: &str) -> EmployeeRecord {
        EmployeeRecord::new(name, "Ops", title, location, "")
    }

    #[test]
    fn test_job_role_label_strips_code_prefix() {
        assert_eq!(job_role_label("JC1042 Engineer"), "Engineer");
        assert_eq!(job_role_label("Manager"), "Manager");
        assert_eq!(job_role_label("Analyst1"), "1");
        assert_eq!(job_role_label(""), UNKNOWN_ROLE);
    }

    #[test]
    fn test_job_role_label_counts_chars_not_bytes() {
        assert_eq!(job_role_label("ÉÉÉÉÉÉ Chef"), "Chef");
    }

    #[test]
    fn test_group_by_location_keeps_first_seen_order() {
        let records = vec![
            emp("A", "X", "Paris"),
            emp("B", "X", "Oslo"),
            emp("C", "X", "Paris"),
            emp("D", "X", ""),
        ];
        let groups = group_by_location(&records);
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["Paris", "Oslo", UNKNOWN_LOCATION]);
        assert_eq!(groups["Paris"].len(), 2);
    }

    #[test]
    fn test_group_by_job_role_merges_same_label() {
        let records = vec![
            emp("A", "JC0001 Engineer", "Paris"),
            emp("B", "JC0002 Engineer", "Paris"),
            emp("C", "JC0003 Designer", "Paris"),
        ];
        let groups = group_by_job_role(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Engineer"].len(), 2);
    }

    #[test]
    fn test_distinct_values() {
        let records = vec![emp("A", "X", "Paris"), emp("B", "X", ""), emp("C", "X", "Paris"), emp("D", "X", "Oslo")];
        assert_eq!(distinct_values(&records, |r| r.location.as_str()), vec!["Paris", "Oslo"]);
    }
}
