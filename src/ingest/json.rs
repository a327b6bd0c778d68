//! JSON ingestion
//!
//! Accepts an array of objects or a single object. Each field is read from
//! the first alias key holding a non-empty value; numbers and booleans are
//! stringified.

use super::IngestResult;
use crate::graph::EmployeeRecord;
use serde_json::{Map, Value};
use tracing::warn;

/// Value used when a required field has no alias present
pub const UNKNOWN: &str = "Unknown";

const DEPARTMENT_KEYS: &[&str] = &["Department", "department", "Dept", "dept"];
const NAME_KEYS: &[&str] = &["Employee Name", "employeeName", "name", "fullName"];
const JOB_KEYS: &[&str] = &["Job Profile", "jobProfile", "title", "position"];
const LOCATION_KEYS: &[&str] = &["Location", "location", "office"];
const MANAGER_KEYS: &[&str] = &["Reporting Manager", "reportingManager", "manager", "supervisor"];
const ID_KEYS: &[&str] = &["Employee ID", "employeeID", "staffID", "id"];
const EMAIL_KEYS: &[&str] = &["Email", "email", "mail"];
const PHONE_KEYS: &[&str] = &["Phone", "phone", "mobile", "contact"];

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn pick(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| object.get(*key).and_then(as_text))
}

fn pick_or(object: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    pick(object, keys).unwrap_or_else(|| default.to_string())
}

/// Record from one JSON object
pub fn record_from_object(object: &Map<String, Value>) -> EmployeeRecord {
    EmployeeRecord::new(
        pick_or(object, NAME_KEYS, UNKNOWN),
        pick_or(object, DEPARTMENT_KEYS, UNKNOWN),
        pick_or(object, JOB_KEYS, UNKNOWN),
        pick_or(object, LOCATION_KEYS, UNKNOWN),
        pick_or(object, MANAGER_KEYS, ""),
    )
    .with_employee_id(pick_or(object, ID_KEYS, ""))
    .with_email(pick_or(object, EMAIL_KEYS, ""))
    .with_phone(pick_or(object, PHONE_KEYS, ""))
}

/// Parse JSON text into records; entries that are not objects are skipped
pub fn parse_json(text: &str) -> IngestResult<Vec<EmployeeRecord>> {
    let value: Value = serde_json::from_str(text)?;

    let entries = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut records = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        match entry {
            Value::Object(object) => records.push(record_from_object(object)),
            _ => warn!("Skipping JSON entry {}: not an object", i),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestError;

    #[test]
    fn test_aliases_and_defaults() {
        let text = r#"[
            {"fullName": "Alice", "dept": "Ops", "manager": "", "id": 42},
            {"Employee Name": "Bob", "Department": "Ops", "title": "JC0002 Lead",
             "office": "Paris", "supervisor": "Alice", "mail": "bob@example.com"}
        ]"#;
        let records = parse_json(text).unwrap();
        assert_eq!(records.len(), 2);

        let alice = &records[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.department, "Ops");
        assert_eq!(alice.job_title, UNKNOWN);
        assert_eq!(alice.location, UNKNOWN);
        assert_eq!(alice.employee_id.as_deref(), Some("42"));
        assert!(!alice.has_manager());

        let bob = &records[1];
        assert_eq!(bob.location, "Paris");
        assert_eq!(bob.reporting_manager, "Alice");
        assert_eq!(bob.email.as_deref(), Some("bob@example.com"));
    }

    #[test]
    fn test_empty_value_falls_through_to_next_alias() {
        let text = r#"{"Department": "", "department": "Ops", "name": "Cid"}"#;
        let records = parse_json(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department, "Ops");
    }

    #[test]
    fn test_non_objects_skipped() {
        let records = parse_json(r#"[1, "x", {"name": "Cid"}]"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_json("[{"), Err(IngestError::Json(_))));
    }
}
