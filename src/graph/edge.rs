//! Parent → child link between two hierarchy nodes

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A directed link from parent (`source`) to child (`target`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyLink {
    pub source: NodeId,
    pub target: NodeId,
}

impl HierarchyLink {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        HierarchyLink { source, target }
    }

    /// Check if this link goes FROM a specific node
    pub fn starts_from(&self, node: NodeId) -> bool {
        self.source == node
    }

    /// Check if this link goes TO a specific node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.target == node
    }

    /// Check if either endpoint is the node
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}
