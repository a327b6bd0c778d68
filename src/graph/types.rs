//! Core type definitions for the hierarchy model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a node within one hierarchy build
///
/// Ids come from a single counter that restarts at 0 on every full rebuild,
/// so they are only meaningful inside the snapshot that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Kind of a hierarchy node
///
/// Serialized in kebab-case (`job-role`, `top-level-role`) so persisted
/// snapshots keep the labels the renderer keys its styling on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Department,
    Manager,
    Location,
    JobRole,
    TopLevelRole,
    Employee,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Department,
        NodeKind::Manager,
        NodeKind::Location,
        NodeKind::JobRole,
        NodeKind::TopLevelRole,
        NodeKind::Employee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Department => "department",
            NodeKind::Manager => "manager",
            NodeKind::Location => "location",
            NodeKind::JobRole => "job-role",
            NodeKind::TopLevelRole => "top-level-role",
            NodeKind::Employee => "employee",
        }
    }

    /// Whether a single click toggles this node's expansion
    /// (and a double click aggregates the employees under it).
    pub fn is_expandable(&self) -> bool {
        match self {
            NodeKind::Manager
            | NodeKind::Location
            | NodeKind::JobRole
            | NodeKind::TopLevelRole => true,
            NodeKind::Department | NodeKind::Employee => false,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown node kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "#42");

        let id2: NodeId = 100.into();
        assert_eq!(id2.as_u64(), 100);
        assert!(id < id2);
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
        }
        assert_eq!("Job_Role".parse::<NodeKind>().unwrap(), NodeKind::JobRole);
        assert!("team".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&NodeKind::TopLevelRole).unwrap();
        assert_eq!(json, "\"top-level-role\"");
    }

    #[test]
    fn test_expandable_kinds() {
        assert!(NodeKind::Manager.is_expandable());
        assert!(NodeKind::TopLevelRole.is_expandable());
        assert!(!NodeKind::Department.is_expandable());
        assert!(!NodeKind::Employee.is_expandable());
    }
}
