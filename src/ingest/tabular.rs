//! Delimited-text ingestion
//!
//! Column headers are free-form; each one is lowercased, trimmed and mapped
//! onto a record field by substring rules tried in a fixed order. The
//! first rule that matches wins, so "Reporting Manager Email" is a manager
//! column, not an email column. Unmapped columns are ignored.

use super::IngestResult;
use crate::graph::EmployeeRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use tracing::{debug, warn};

/// Record field a column maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Department,
    Name,
    JobTitle,
    Location,
    ReportingManager,
    EmployeeId,
    Email,
    Phone,
}

/// Field for a header, if any rule matches
pub fn classify_header(header: &str) -> Option<Column> {
    let h = header.trim().to_lowercase();
    let has = |needle: &str| h.contains(needle);

    if has("department") || h == "dept" {
        Some(Column::Department)
    } else if (has("employee") && has("name")) || h == "name" || h == "full name" {
        Some(Column::Name)
    } else if (has("job") && has("profile")) || has("title") || has("position") {
        Some(Column::JobTitle)
    } else if has("location") || h == "office" {
        Some(Column::Location)
    } else if has("manager") || has("supervisor") {
        Some(Column::ReportingManager)
    } else if (has("employee") && has("id")) || has("staff id") || has("emp id") {
        Some(Column::EmployeeId)
    } else if has("mail") {
        Some(Column::Email)
    } else if has("phone") || has("mobile") || has("contact") {
        Some(Column::Phone)
    } else {
        None
    }
}

#[derive(Default)]
struct Row {
    department: String,
    name: String,
    job_title: String,
    location: String,
    reporting_manager: String,
    employee_id: String,
    email: String,
    phone: String,
}

impl Row {
    fn set(&mut self, column: Column, value: &str) {
        let slot = match column {
            Column::Department => &mut self.department,
            Column::Name => &mut self.name,
            Column::JobTitle => &mut self.job_title,
            Column::Location => &mut self.location,
            Column::ReportingManager => &mut self.reporting_manager,
            Column::EmployeeId => &mut self.employee_id,
            Column::Email => &mut self.email,
            Column::Phone => &mut self.phone,
        };
        *slot = value.to_string();
    }

    fn into_record(self) -> EmployeeRecord {
        EmployeeRecord::new(self.name, self.department, self.job_title, self.location, self.reporting_manager)
            .with_employee_id(self.employee_id)
            .with_email(self.email)
            .with_phone(self.phone)
    }
}

/// Parse delimited text with a header row
///
/// Rows that fail to parse or carry no name are skipped with a warning.
pub fn parse_delimited<R: Read>(reader: R, delimiter: u8) -> IngestResult<Vec<EmployeeRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns: Vec<Option<Column>> = reader.headers()?.iter().map(classify_header).collect();
    debug!("Mapped {} of {} columns", columns.iter().filter(|c| c.is_some()).count(), columns.len());

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let raw: StringRecord = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed row {}: {}", line + 2, e);
                continue;
            }
        };

        let mut row = Row::default();
        for (column, value) in columns.iter().zip(raw.iter()) {
            if let Some(column) = column {
                row.set(*column, value);
            }
        }

        if row.name.trim().is_empty() {
            warn!("Skipping row {} without an employee name", line + 2);
            continue;
        }
        records.push(row.into_record());
    }

    Ok(records)
}

/// Parse comma-separated text with a header row
pub fn parse_csv<R: Read>(reader: R) -> IngestResult<Vec<EmployeeRecord>> {
    parse_delimited(reader, b',')
}
