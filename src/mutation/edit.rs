//! Structural edits: add and delete
//!
//! Every edit validates its input before touching the snapshot, so a
//! failed edit leaves it unchanged.

use crate::algo::TreeView;
use crate::graph::{GraphError, GraphResult, HierarchyLink, HierarchyNode, HierarchySnapshot, NodeId, NodeKind};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Request to add one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNode {
    pub name: String,
    pub kind: NodeKind,
    /// Unlinked when absent
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub member_count: usize,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        NewNode {
            name: name.into(),
            kind,
            parent: None,
            member_count: 0,
            description: None,
        }
    }

    pub fn under(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.member_count = count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// How `delete_node` treats the node's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Remove the node only; children move up to its parent
    Single,
    /// Remove the node and everything below it
    Cascade,
}

impl FromStr for DeleteMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(DeleteMode::Single),
            "cascade" | "subtree" | "children" => Ok(DeleteMode::Cascade),
            other => Err(GraphError::Validation(format!("Unknown delete mode '{}'", other))),
        }
    }
}

/// Append a node and link it under its parent
///
/// The id is the larger of `counter` and one past the highest id in the
/// snapshot, so ids are never reused; `counter` is advanced past it.
pub fn add_node(snapshot: &mut HierarchySnapshot, request: NewNode, counter: &mut u64) -> GraphResult<NodeId> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(GraphError::Validation("Node name is required".to_string()));
    }
    if let Some(parent) = request.parent {
        if !snapshot.has_node(parent) {
            return Err(GraphError::NodeNotFound(parent));
        }
    }

    let id = NodeId::new((*counter).max(snapshot.next_free_id()));
    *counter = id.as_u64() + 1;

    let mut node = HierarchyNode::new(id, name, request.kind).with_count(request.member_count);
    if let Some(description) = request.description {
        node = node.with_description(description);
    }
    snapshot.push_node(node);

    if let Some(parent) = request.parent {
        snapshot.link(parent, id)?;
    }

    info!("Added {} node {} '{}'", request.kind, id, name);
    Ok(id)
}

/// Remove a node; returns the ids actually removed
///
/// An unknown id is a no-op and returns an empty list.
pub fn delete_node(snapshot: &mut HierarchySnapshot, id: NodeId, mode: DeleteMode) -> Vec<NodeId> {
    if !snapshot.has_node(id) {
        debug!("Delete of unknown node {} ignored", id);
        return Vec::new();
    }

    let removed = match mode {
        DeleteMode::Single => {
            let parent = snapshot.parent_of(id);
            let children = snapshot.children_of(id);

            snapshot.nodes.retain(|n| n.id != id);
            snapshot.links.retain(|l| !l.touches(id));

            if let Some(parent) = parent {
                for child in children {
                    snapshot.links.push(HierarchyLink::new(parent, child));
                }
            }
            vec![id]
        }
        DeleteMode::Cascade => {
            let removed = TreeView::from_snapshot(snapshot).subtree(id);
            let doomed: FxHashSet<NodeId> = removed.iter().copied().collect();

            snapshot.nodes.retain(|n| !doomed.contains(&n.id));
            snapshot
                .links
                .retain(|l| !doomed.contains(&l.source) && !doomed.contains(&l.target));
            removed
        }
    };

    info!("Deleted node {} ({:?}), {} node(s) removed", id, mode, removed.len());
    removed
}
