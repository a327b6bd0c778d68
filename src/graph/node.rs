//! Hierarchy node
//!
//! A node is either a synthetic grouping (department, location, job role)
//! or a person (manager, employee). It carries the records it stands for
//! plus the two UI flags the renderer reads.

use super::record::EmployeeRecord;
use super::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// A node in a hierarchy snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// Unique within one snapshot
    pub id: NodeId,

    /// Display label
    pub name: String,

    pub kind: NodeKind,

    /// For managers: direct reports. For groups: records in the group.
    pub member_count: usize,

    /// Records behind this node, in input order
    #[serde(default)]
    pub members: Vec<EmployeeRecord>,

    #[serde(default)]
    pub expanded: bool,

    /// Derived from the parent's expansion state
    #[serde(default)]
    pub hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Manager node whose subtree this node belongs to (lookup only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_manager_id: Option<NodeId>,
}

impl HierarchyNode {
    /// Create a collapsed, visible node with no members
    pub fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        HierarchyNode {
            id,
            name: name.into(),
            kind,
            member_count: 0,
            members: Vec::new(),
            expanded: false,
            hidden: false,
            description: None,
            owner_manager_id: None,
        }
    }

    /// Attach members; the count follows the member list
    pub fn with_members(mut self, members: Vec<EmployeeRecord>) -> Self {
        self.member_count = members.len();
        self.members = members;
        self
    }

    /// Override the member count (managers count reports, not members)
    pub fn with_count(mut self, count: usize) -> Self {
        self.member_count = count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() { None } else { Some(description) };
        self
    }

    pub fn with_owner(mut self, owner: NodeId) -> Self {
        self.owner_manager_id = Some(owner);
        self
    }
}

impl PartialEq for HierarchyNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HierarchyNode {}

impl std::hash::Hash for HierarchyNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
