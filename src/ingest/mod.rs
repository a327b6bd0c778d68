//! Record ingestion from files
//!
//! Each file is parsed on its own: a bad file is reported and skipped while
//! the records of the good ones are kept.

pub mod json;
pub mod tabular;

use crate::graph::EmployeeRecord;
use crate::hierarchy::distinct_values;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub use json::parse_json;
pub use tabular::{classify_header, parse_csv, parse_delimited, Column};

/// Ingestion errors
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Error parsing file {file}: {message}")]
    Parse { file: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Input file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> IngestResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "tsv" | "tab" => Ok(InputFormat::Tsv),
            "json" => Ok(InputFormat::Json),
            _ => Err(IngestError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse one file
pub fn read_file(path: &Path) -> IngestResult<Vec<EmployeeRecord>> {
    let format = InputFormat::from_path(path)?;
    match format {
        InputFormat::Csv => parse_csv(fs::File::open(path)?),
        InputFormat::Tsv => parse_delimited(fs::File::open(path)?, b'\t'),
        InputFormat::Json => parse_json(&fs::read_to_string(path)?),
    }
}

/// Outcome of importing several files
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Records from every file that parsed, in file order
    pub records: Vec<EmployeeRecord>,
    /// Files that parsed
    pub imported: Vec<PathBuf>,
    /// One `IngestError::Parse` per file that did not
    pub failures: Vec<IngestError>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every file, collecting records from the good ones
pub fn import_files<P: AsRef<Path>>(paths: &[P]) -> ImportReport {
    let mut report = ImportReport::default();

    for path in paths {
        let path = path.as_ref();
        match read_file(path) {
            Ok(records) => {
                info!("Read {} records from {}", records.len(), path.display());
                report.records.extend(records);
                report.imported.push(path.to_path_buf());
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                report.failures.push(IngestError::Parse {
                    file: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

/// Distinct departments in first-seen order
pub fn departments(records: &[EmployeeRecord]) -> Vec<String> {
    distinct_values(records, |r| r.department.as_str())
}

/// Distinct locations, optionally within one department
pub fn locations(records: &[EmployeeRecord], department: Option<&str>) -> Vec<String> {
    match department {
        Some(department) => {
            let scoped: Vec<EmployeeRecord> =
                records.iter().filter(|r| r.department == department).cloned().collect();
            distinct_values(&scoped, |r| r.location.as_str())
        }
        None => distinct_values(records, |r| r.location.as_str()),
    }
}

/// Records of one department, in input order
pub fn department_records(records: &[EmployeeRecord], department: &str) -> Vec<EmployeeRecord> {
    records.iter().filter(|r| r.department == department).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_by_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("a.json")).unwrap(), InputFormat::Json);
        assert!(matches!(
            InputFormat::from_path(Path::new("a.xlsx")),
            Err(IngestError::UnsupportedFormat(_))
        ));
        assert!(InputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_departments_and_locations() {
        let records = vec![
            EmployeeRecord::new("A", "Ops", "X", "Paris", ""),
            EmployeeRecord::new("B", "Eng", "X", "Oslo", ""),
            EmployeeRecord::new("C", "Ops", "X", "Rome", ""),
        ];
        assert_eq!(departments(&records), vec!["Ops", "Eng"]);
        assert_eq!(locations(&records, Some("Ops")), vec!["Paris", "Rome"]);
        assert_eq!(locations(&records, None).len(), 3);
        assert_eq!(department_records(&records, "Eng").len(), 1);
    }
}
