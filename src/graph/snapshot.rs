//! Hierarchy snapshot storage
//!
//! A snapshot is the `{nodes, links}` pair handed to the renderer. Nodes
//! live in an arena (`Vec`) in creation order; links reference them by id.
//! The first node is the root by convention.

use super::edge::HierarchyLink;
use super::node::HierarchyNode;
use super::types::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or editing a hierarchy
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Manager '{0}' not found in department")]
    ManagerNotFound(String),

    #[error("Employee '{0}' not found in department")]
    EmployeeNotFound(String),

    #[error("No employees found for department '{department}'{}", location_suffix(.location))]
    EmptyResult {
        department: String,
        location: Option<String>,
    },

    #[error("Invalid link: source node {0} does not exist")]
    InvalidLinkSource(NodeId),

    #[error("Invalid link: target node {0} does not exist")]
    InvalidLinkTarget(NodeId),

    #[error("Node {node} has {incoming} incoming links, expected {expected}")]
    MalformedTree {
        node: NodeId,
        incoming: usize,
        expected: usize,
    },
}

fn location_suffix(location: &Option<String>) -> String {
    match location {
        Some(loc) => format!(" at location '{}'", loc),
        None => String::new(),
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Nodes plus parent → child links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    pub nodes: Vec<HierarchyNode>,
    pub links: Vec<HierarchyLink>,
}

impl HierarchySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first node, which every metric treats as the root
    pub fn root(&self) -> Option<&HierarchyNode> {
        self.nodes.first()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut HierarchyNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Append a node without linking it
    pub fn push_node(&mut self, node: HierarchyNode) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Link two existing nodes, parent first
    pub fn link(&mut self, source: NodeId, target: NodeId) -> GraphResult<()> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidLinkSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidLinkTarget(target));
        }
        self.push_link(source, target);
        Ok(())
    }

    /// Link two nodes the caller knows exist
    pub(crate) fn push_link(&mut self, source: NodeId, target: NodeId) {
        self.links.push(HierarchyLink::new(source, target));
    }

    /// Node id → position in `nodes`
    fn positions(&self) -> FxHashMap<NodeId, usize> {
        self.nodes.iter().enumerate().map(|(idx, n)| (n.id, idx)).collect()
    }

    /// Child → source of its first incoming link
    fn first_parents(&self) -> FxHashMap<NodeId, NodeId> {
        let mut parents = FxHashMap::default();
        for link in &self.links {
            parents.entry(link.target).or_insert(link.source);
        }
        parents
    }

    /// Parent via the first incoming link, if the parent still exists
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.links
            .iter()
            .find(|l| l.ends_at(id))
            .map(|l| l.source)
            .filter(|source| self.has_node(*source))
    }

    /// Existing children in link order
    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        let ids: FxHashSet<NodeId> = self.nodes.iter().map(|n| n.id).collect();
        self.links
            .iter()
            .filter(|l| l.starts_from(id) && ids.contains(&l.target))
            .map(|l| l.target)
            .collect()
    }

    pub fn max_id(&self) -> Option<NodeId> {
        self.nodes.iter().map(|n| n.id).max()
    }

    /// Smallest id greater than every id in the snapshot
    pub fn next_free_id(&self) -> u64 {
        self.max_id().map(|id| id.as_u64() + 1).unwrap_or(0)
    }

    /// Check that the root has no parent and every other node exactly one
    pub fn validate_tree(&self) -> GraphResult<()> {
        let mut incoming: FxHashMap<NodeId, usize> = FxHashMap::default();
        for link in &self.links {
            *incoming.entry(link.target).or_insert(0) += 1;
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            let count = incoming.get(&node.id).copied().unwrap_or(0);
            let expected = if idx == 0 { 0 } else { 1 };
            if count != expected {
                return Err(GraphError::MalformedTree {
                    node: node.id,
                    incoming: count,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// A node is visible when neither it nor any ancestor is hidden
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut seen = FxHashSet::default();
        let mut current = Some(id);
        while let Some(node_id) = current {
            if !seen.insert(node_id) {
                break;
            }
            match self.get_node(node_id) {
                Some(node) if node.hidden => return false,
                Some(_) => current = self.parent_of(node_id),
                None => return false,
            }
        }
        true
    }

    /// Visibility of every node, resolved in one pass over the links
    ///
    /// Agrees with [`HierarchySnapshot::is_visible`]; each ancestor path is
    /// walked once and its result shared by every node on it.
    pub fn visibility(&self) -> FxHashMap<NodeId, bool> {
        let positions = self.positions();
        let parents = self.first_parents();
        let mut known: FxHashMap<NodeId, bool> = FxHashMap::default();

        for node in &self.nodes {
            let mut path = Vec::new();
            let mut seen = FxHashSet::default();
            let mut current = Some(node.id);

            let visible = loop {
                let Some(id) = current else {
                    break true;
                };
                if let Some(state) = known.get(&id) {
                    break *state;
                }
                if !seen.insert(id) {
                    break true;
                }
                match positions.get(&id).and_then(|idx| self.nodes.get(*idx)) {
                    Some(n) if n.hidden => {
                        path.push(id);
                        break false;
                    }
                    Some(_) => {
                        path.push(id);
                        current = parents.get(&id).copied().filter(|p| positions.contains_key(p));
                    }
                    None => break false,
                }
            };

            for id in path {
                known.insert(id, visible);
            }
        }
        known
    }

    pub fn visible_nodes(&self) -> Vec<&HierarchyNode> {
        let visibility = self.visibility();
        self.nodes
            .iter()
            .filter(|n| visibility.get(&n.id).copied().unwrap_or(false))
            .collect()
    }

    /// Links whose target is visible
    pub fn visible_links(&self) -> Vec<&HierarchyLink> {
        let visibility = self.visibility();
        self.links
            .iter()
            .filter(|l| visibility.get(&l.target).copied().unwrap_or(false))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::NodeKind;

    fn three_level() -> HierarchySnapshot {
        let mut s = HierarchySnapshot::new();
        s.push_node(HierarchyNode::new(NodeId::new(0), "Ops Department", NodeKind::Department));
        s.push_node(HierarchyNode::new(NodeId::new(1), "Bob", NodeKind::Manager));
        s.push_node(HierarchyNode::new(NodeId::new(2), "Paris", NodeKind::Location));
        s.link(NodeId::new(0), NodeId::new(1)).unwrap();
        s.link(NodeId::new(1), NodeId::new(2)).unwrap();
        s
    }

    #[test]
    fn test_link_requires_existing_nodes() {
        let mut s = three_level();
        assert_eq!(
            s.link(NodeId::new(9), NodeId::new(1)),
            Err(GraphError::InvalidLinkSource(NodeId::new(9)))
        );
        assert_eq!(
            s.link(NodeId::new(1), NodeId::new(9)),
            Err(GraphError::InvalidLinkTarget(NodeId::new(9)))
        );
        assert_eq!(s.link_count(), 2);
    }

    #[test]
    fn test_parent_and_children() {
        let s = three_level();
        assert_eq!(s.parent_of(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(s.parent_of(NodeId::new(0)), None);
        assert_eq!(s.children_of(NodeId::new(0)), vec![NodeId::new(1)]);
        assert!(s.children_of(NodeId::new(2)).is_empty());
    }

    #[test]
    fn test_next_free_id() {
        let s = three_level();
        assert_eq!(s.max_id(), Some(NodeId::new(2)));
        assert_eq!(s.next_free_id(), 3);
        assert_eq!(HierarchySnapshot::new().next_free_id(), 0);
    }

    #[test]
    fn test_validate_tree() {
        let mut s = three_level();
        assert!(s.validate_tree().is_ok());

        s.push_node(HierarchyNode::new(NodeId::new(3), "Orphan", NodeKind::Employee));
        assert_eq!(
            s.validate_tree(),
            Err(GraphError::MalformedTree { node: NodeId::new(3), incoming: 0, expected: 1 })
        );
    }

    #[test]
    fn test_hidden_ancestor_hides_descendants() {
        let mut s = three_level();
        s.get_node_mut(NodeId::new(1)).unwrap().hidden = true;

        assert!(s.is_visible(NodeId::new(0)));
        assert!(!s.is_visible(NodeId::new(1)));
        assert!(!s.is_visible(NodeId::new(2)));
        assert_eq!(s.visible_nodes().len(), 1);
        assert!(s.visible_links().is_empty());
    }

    #[test]
    fn test_visibility_matches_per_node_walk() {
        let mut s = three_level();
        s.push_node(HierarchyNode::new(NodeId::new(3), "Oslo", NodeKind::Location));
        s.link(NodeId::new(0), NodeId::new(3)).unwrap();
        s.get_node_mut(NodeId::new(1)).unwrap().hidden = true;
        // dangling parent: treated as a root, so visible
        s.push_node(HierarchyNode::new(NodeId::new(4), "Loose", NodeKind::Employee));
        s.links.push(HierarchyLink::new(NodeId::new(9), NodeId::new(4)));

        let visibility = s.visibility();
        for node in &s.nodes {
            assert_eq!(visibility[&node.id], s.is_visible(node.id), "node {}", node.id);
        }
        let visible: Vec<u64> = s.visible_nodes().iter().map(|n| n.id.as_u64()).collect();
        assert_eq!(visible, vec![0, 3, 4]);
        assert_eq!(s.visible_links().len(), 2);
    }

    #[test]
    fn test_visibility_survives_cyclic_links() {
        let mut s = three_level();
        s.links.push(HierarchyLink::new(NodeId::new(2), NodeId::new(0)));
        let visibility = s.visibility();
        assert_eq!(visibility.len(), 3);
        for node in &s.nodes {
            assert_eq!(visibility[&node.id], s.is_visible(node.id));
        }
    }

    #[test]
    fn test_empty_result_message() {
        let err = GraphError::EmptyResult { department: "Ops".into(), location: Some("Oslo".into()) };
        assert_eq!(err.to_string(), "No employees found for department 'Ops' at location 'Oslo'");
    }
}
