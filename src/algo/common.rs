//! Read-only topology view for tree algorithms
//!
//! Snapshots store links as a flat list, which is fine for editing but
//! slow for repeated child lookups. The view maps node ids to dense
//! indices (0..N, in snapshot order) and keeps the children in
//! Compressed Sparse Row form.

use crate::graph::{HierarchySnapshot, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Dense, integer-indexed view of a snapshot's parent → child links
pub struct TreeView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,
    /// Offsets into `child_targets`. Size = node_count + 1
    pub child_offsets: Vec<usize>,
    /// Contiguous array of child indices, in link order per parent
    pub child_targets: Vec<usize>,
}

impl TreeView {
    /// Build the view; links with a missing endpoint are dropped
    pub fn from_snapshot(snapshot: &HierarchySnapshot) -> Self {
        let node_count = snapshot.nodes.len();
        let mut index_to_node = Vec::with_capacity(node_count);
        let mut node_to_index = FxHashMap::default();
        node_to_index.reserve(node_count);

        for (idx, node) in snapshot.nodes.iter().enumerate() {
            index_to_node.push(node.id);
            node_to_index.entry(node.id).or_insert(idx);
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for link in &snapshot.links {
            let (Some(&source), Some(&target)) =
                (node_to_index.get(&link.source), node_to_index.get(&link.target))
            else {
                continue;
            };
            children[source].push(target);
        }

        let mut child_offsets = Vec::with_capacity(node_count + 1);
        let mut child_targets = Vec::with_capacity(snapshot.links.len());
        child_offsets.push(0);
        for targets in children {
            child_targets.extend(targets);
            child_offsets.push(child_targets.len());
        }

        TreeView {
            node_count,
            index_to_node,
            node_to_index,
            child_offsets,
            child_targets,
        }
    }

    /// Children of a node (by index)
    pub fn children(&self, idx: usize) -> &[usize] {
        let start = self.child_offsets[idx];
        let end = self.child_offsets[idx + 1];
        &self.child_targets[start..end]
    }

    pub fn child_count(&self, idx: usize) -> usize {
        self.child_offsets[idx + 1] - self.child_offsets[idx]
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.node_to_index.get(&id).copied()
    }

    /// Breadth-first levels from `start_idx`: `(index, level)` in visit order
    ///
    /// Every node is visited once, so cyclic links cannot loop.
    pub fn levels_from(&self, start_idx: usize) -> Vec<(usize, usize)> {
        let mut order = Vec::new();
        if start_idx >= self.node_count {
            return order;
        }

        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(start_idx);
        queue.push_back((start_idx, 0));

        while let Some((current, level)) = queue.pop_front() {
            order.push((current, level));
            for &next in self.children(current) {
                if visited.insert(next) {
                    queue.push_back((next, level + 1));
                }
            }
        }

        order
    }

    /// Ids of `id` and everything reachable from it through child links
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        match self.index_of(id) {
            Some(idx) => self
                .levels_from(idx)
                .into_iter()
                .map(|(i, _)| self.index_to_node[i])
                .collect(),
            None => Vec::new(),
        }
    }
}
