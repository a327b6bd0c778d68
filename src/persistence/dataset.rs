//! One named dataset: its records, selections and layout state

use crate::config::LayoutSettings;
use crate::graph::{EmployeeRecord, HierarchySnapshot, NodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Saved node position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Everything stored for one dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub employees: Vec<EmployeeRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub current_department: Option<String>,

    #[serde(default)]
    pub current_manager: Option<String>,

    #[serde(default)]
    pub current_location: Option<String>,

    /// Positions keyed by node id of the working snapshot
    #[serde(default)]
    pub node_positions: BTreeMap<NodeId, Position>,

    #[serde(default)]
    pub layout: LayoutSettings,

    /// Working snapshot, including edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<HierarchySnapshot>,

    /// Snapshot as last built, for reset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_snapshot: Option<HierarchySnapshot>,
}

impl Dataset {
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        Dataset {
            employees,
            created_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Drop everything derived from the current selection
    pub fn clear_view(&mut self) {
        self.node_positions.clear();
        self.snapshot = None;
        self.original_snapshot = None;
    }

    pub fn set_position(&mut self, id: NodeId, position: Position) {
        self.node_positions.insert(id, position);
    }

    pub fn forget_positions<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) {
        for id in ids {
            self.node_positions.remove(&id);
        }
    }
}
