//! Hierarchy data model
//!
//! - Employee records as ingested
//! - Typed nodes (department, manager, location, job role, employee)
//! - Parent → child links
//! - Snapshots: the `{nodes, links}` unit that is rendered, edited and persisted

pub mod edge;
pub mod node;
pub mod record;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use edge::HierarchyLink;
pub use node::HierarchyNode;
pub use record::{EmployeeRecord, PLACEHOLDER_JOB_TITLE, PLACEHOLDER_LOCATION};
pub use snapshot::{GraphError, GraphResult, HierarchySnapshot};
pub use types::{NodeId, NodeKind};
