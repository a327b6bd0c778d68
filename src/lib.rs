//! Org Chart Hierarchy Engine
//!
//! Reconstructs an organizational reporting tree from flat, noisy employee
//! records and keeps it consistent through interactive edits.
//!
//! # Architecture
//!
//! - `graph`: records, typed nodes, links and the snapshot arena
//! - `matching`: name normalization and token-overlap matching
//! - `hierarchy`: manager index, department and manager-focused builds
//! - `algo`: tree depth and breadth for layout sizing
//! - `mutation`: add/delete edits, expand/collapse, employee aggregation
//! - `gesture`: single/double click classification
//! - `ingest`: CSV, TSV and JSON record ingestion
//! - `persistence`: the JSON dataset store
//! - `session`: application state tying the pieces together
//!
//! ## Example Usage
//!
//! ```rust
//! use orgchart::graph::{EmployeeRecord, NodeKind};
//! use orgchart::hierarchy::build_department_hierarchy;
//! use orgchart::algo::TreeMetrics;
//!
//! let employees = vec![
//!     EmployeeRecord::new("Alice", "Ops", "JC0001 Director", "Paris", ""),
//!     EmployeeRecord::new("Bob", "Ops", "JC0002 Lead", "Paris", "Alice"),
//!     EmployeeRecord::new("Carol", "Ops", "JC0003 Engineer", "Oslo", "Bob"),
//! ];
//!
//! let snapshot = build_department_hierarchy("Ops", &employees, None).unwrap();
//! assert_eq!(snapshot.nodes[0].name, "Ops Department");
//! assert!(snapshot.nodes.iter().any(|n| n.kind == NodeKind::Manager && n.name == "Bob"));
//!
//! let metrics = TreeMetrics::of(&snapshot);
//! assert!(metrics.depth > 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod gesture;
pub mod graph;
pub mod hierarchy;
pub mod ingest;
pub mod matching;
pub mod mutation;
pub mod persistence;
pub mod session;

// Re-export main types for convenience
pub use graph::{
    EmployeeRecord, GraphError, GraphResult, HierarchyLink, HierarchyNode, HierarchySnapshot, NodeId,
    NodeKind,
};

pub use matching::{find_best_match, normalize, similarity, MATCH_THRESHOLD};

pub use hierarchy::{
    build_department_hierarchy, build_manager_hierarchy, build_manager_structure, managers_above,
    HierarchyBuilder, ManagerIndex, SummaryStats,
};

pub use algo::{breadth, depth, TreeMetrics};

pub use mutation::{add_node, collect_employees, delete_node, toggle_expansion, DeleteMode, NewNode};

pub use gesture::{ClickClassifier, Gesture};

pub use config::{GestureConfig, LayoutSettings, SessionConfig};

pub use ingest::{import_files, ImportReport, IngestError, IngestResult};

pub use persistence::{Dataset, DatasetStore, Position, StoreError, StoreResult};

pub use session::{ClickOutcome, ManagerChoice, Session, StatusKind, StatusMessage};

pub use error::{OrgError, OrgResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
