//! Hierarchy reconstruction
//!
//! From a flat list of employee records to a tree of typed nodes:
//! - `manager_index`: who reports to whom, with placeholder managers
//! - `grouping`: location and job-role groups
//! - `builder`: full department and manager-focused builds
//! - `chain`: chain of command and summary statistics

pub mod builder;
pub mod chain;
pub mod grouping;
pub mod manager_index;

pub use builder::{build_department_hierarchy, build_manager_hierarchy, HierarchyBuilder};
pub use chain::{managers_above, walk_chain, SummaryStats};
pub use grouping::{
    distinct_values, group_by_job_role, group_by_location, job_role_label, UNKNOWN_LOCATION, UNKNOWN_ROLE,
};
pub use manager_index::{build_manager_structure, ManagerEntry, ManagerIndex};
