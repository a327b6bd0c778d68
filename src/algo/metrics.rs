//! Tree depth and breadth for layout sizing
//!
//! Both metrics treat `nodes[0]` as the root and ignore nodes that are not
//! reachable from it.

use super::common::TreeView;
use crate::graph::HierarchySnapshot;
use serde::{Deserialize, Serialize};

/// Depth and breadth of one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub depth: usize,
    pub breadth: usize,
}

impl TreeMetrics {
    pub fn of(snapshot: &HierarchySnapshot) -> Self {
        let widths = level_widths(snapshot);
        TreeMetrics {
            depth: widths.len().max(1),
            breadth: widths.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Number of nodes at each level below the root, root level first
pub fn level_widths(snapshot: &HierarchySnapshot) -> Vec<usize> {
    if snapshot.is_empty() {
        return Vec::new();
    }
    let view = TreeView::from_snapshot(snapshot);

    let mut widths: Vec<usize> = Vec::new();
    for (_, level) in view.levels_from(0) {
        if widths.len() <= level {
            widths.resize(level + 1, 0);
        }
        widths[level] += 1;
    }
    widths
}

/// 1 + the longest root-to-leaf path length; 1 for an empty snapshot
pub fn depth(snapshot: &HierarchySnapshot) -> usize {
    TreeMetrics::of(snapshot).depth
}

/// Largest number of nodes on a single level; 0 for an empty snapshot
pub fn breadth(snapshot: &HierarchySnapshot) -> usize {
    TreeMetrics::of(snapshot).breadth
}
