//! Employee records as ingested from tabular or JSON sources

use crate::matching::normalize;
use serde::{Deserialize, Serialize};

/// Job title given to managers that are referenced but absent from the roster
pub const PLACEHOLDER_JOB_TITLE: &str = "Manager (Details not found)";

/// Location given to placeholder managers
pub const PLACEHOLDER_LOCATION: &str = "N/A";

/// One employee row
///
/// Records are never mutated after ingestion. Identity is the normalized
/// name within a department; `employee_id` is carried for display only
/// because source data does not guarantee it is present or unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub name: String,

    #[serde(default)]
    pub department: String,

    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub location: String,

    /// Free-text manager name; empty means "no manager"
    #[serde(default)]
    pub reporting_manager: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl EmployeeRecord {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        job_title: impl Into<String>,
        location: impl Into<String>,
        reporting_manager: impl Into<String>,
    ) -> Self {
        EmployeeRecord {
            name: name.into(),
            department: department.into(),
            job_title: job_title.into(),
            location: location.into(),
            reporting_manager: reporting_manager.into(),
            employee_id: None,
            email: None,
            phone: None,
        }
    }

    /// Stand-in for a manager that is referenced but not on the roster
    pub fn placeholder_manager(name: impl Into<String>, department: impl Into<String>) -> Self {
        EmployeeRecord::new(name, department, PLACEHOLDER_JOB_TITLE, PLACEHOLDER_LOCATION, "")
    }

    pub fn with_employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = non_empty(id.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_empty(phone.into());
        self
    }

    /// Comparison key for this record's name
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    pub fn has_manager(&self) -> bool {
        !self.reporting_manager.trim().is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        self.job_title == PLACEHOLDER_JOB_TITLE && self.location == PLACEHOLDER_LOCATION
    }

    /// "Name - Job Title", the long label shown for manager and employee nodes
    pub fn full_label(&self) -> String {
        format!("{} - {}", self.name, self.job_title)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_manager() {
        let m = EmployeeRecord::placeholder_manager("Dana Ghost", "Ops");
        assert_eq!(m.job_title, PLACEHOLDER_JOB_TITLE);
        assert_eq!(m.location, "N/A");
        assert_eq!(m.department, "Ops");
        assert!(!m.has_manager());
        assert!(m.is_placeholder());
    }

    #[test]
    fn test_optional_fields_drop_blanks() {
        let r = EmployeeRecord::new("Ann", "Ops", "Clerk", "Paris", "")
            .with_employee_id("  ")
            .with_email("ann@example.com")
            .with_phone("");
        assert_eq!(r.employee_id, None);
        assert_eq!(r.email.as_deref(), Some("ann@example.com"));
        assert_eq!(r.phone, None);
    }

    #[test]
    fn test_has_manager_ignores_whitespace() {
        let r = EmployeeRecord::new("Ann", "Ops", "Clerk", "Paris", "   ");
        assert!(!r.has_manager());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let r = EmployeeRecord::new("Ann", "Ops", "Clerk", "Paris", "Bob").with_employee_id("E1");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["jobTitle"], "Clerk");
        assert_eq!(json["reportingManager"], "Bob");
        assert_eq!(json["employeeId"], "E1");
        assert!(json.get("email").is_none());
    }
}
