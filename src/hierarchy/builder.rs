//! Hierarchy construction
//!
//! Turns one department's flat record list into a snapshot. Two builds are
//! offered: the full department tree, and a tree focused on one manager
//! (chain of command above, direct reports below).
//!
//! Node ids come from a counter that starts at 0 for every build, so the
//! root is always `#0` and ids follow creation order.

use super::chain::walk_chain;
use super::grouping::{group_by_job_role, group_by_location};
use super::manager_index::ManagerIndex;
use crate::graph::{
    EmployeeRecord, GraphError, GraphResult, HierarchyNode, HierarchySnapshot, NodeId, NodeKind,
};
use crate::matching::{normalize, Roster};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

/// Builds hierarchy snapshots for one department
pub struct HierarchyBuilder {
    department: String,
    location: Option<String>,
    employees: Vec<EmployeeRecord>,
    index: ManagerIndex,
    roster: Roster,
    snapshot: HierarchySnapshot,
    next_id: u64,
    processed: FxHashSet<String>,
    manager_nodes: FxHashMap<String, NodeId>,
}

impl HierarchyBuilder {
    /// Builder over `employees`, which should all belong to `department`
    pub fn new(department: impl Into<String>, employees: &[EmployeeRecord]) -> Self {
        HierarchyBuilder {
            department: department.into(),
            location: None,
            employees: employees.to_vec(),
            index: ManagerIndex::default(),
            roster: Roster::default(),
            snapshot: HierarchySnapshot::new(),
            next_id: 0,
            processed: FxHashSet::default(),
            manager_nodes: FxHashMap::default(),
        }
    }

    /// Restrict the build to records at `location`
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location.filter(|l| !l.is_empty());
        self
    }

    /// Full department tree
    pub fn build(mut self) -> GraphResult<HierarchySnapshot> {
        self.prepare()?;

        let root = self.alloc_id();
        self.snapshot.push_node(
            HierarchyNode::new(root, format!("{} Department", self.department), NodeKind::Department)
                .with_count(self.employees.len()),
        );

        let top_level: Vec<EmployeeRecord> =
            self.employees.iter().filter(|e| !e.has_manager()).cloned().collect();
        if !top_level.is_empty() {
            self.add_groups(root, None, &top_level, true)?;
        }

        let keys: Vec<String> = self.index.keys().cloned().collect();

        // Managers with no in-department manager of their own
        for key in &keys {
            let top = match self.index.get(key) {
                Some(entry) => {
                    !entry.manager.has_manager()
                        || !self.roster.contains(&normalize(&entry.manager.reporting_manager))
                }
                None => false,
            };
            if top && !self.processed.contains(key) {
                self.processed.insert(key.clone());
                self.attach_manager(key, root)?;
            }
        }

        // Everyone else hangs under their own manager's node
        for key in &keys {
            if !self.processed.contains(key) {
                self.place_manager(key, root)?;
            }
        }

        info!(
            "Built {} hierarchy: {} nodes, {} links, {} managers ({} fuzzy, {} placeholders)",
            self.department,
            self.snapshot.node_count(),
            self.snapshot.link_count(),
            self.index.len(),
            self.index.fuzzy_count(),
            self.index.placeholder_count()
        );
        Ok(self.snapshot)
    }

    /// Tree focused on one manager
    ///
    /// The first node is the topmost reachable ancestor; the chain runs
    /// down to the selected manager, whose direct reports are grouped by
    /// location then job role beneath it.
    pub fn build_for_manager(mut self, manager_name: &str) -> GraphResult<HierarchySnapshot> {
        self.prepare()?;

        let key = self
            .index
            .key_for(manager_name)
            .map(str::to_string)
            .ok_or_else(|| GraphError::ManagerNotFound(manager_name.to_string()))?;
        let entry = self
            .index
            .get(&key)
            .cloned()
            .ok_or_else(|| GraphError::ManagerNotFound(manager_name.to_string()))?;

        let mut chain = walk_chain(&entry.manager, &self.roster, &self.employees, Some(self.department.as_str()));
        chain.reverse();
        chain.push(entry.manager.clone());

        let mut parent: Option<NodeId> = None;
        for record in &chain {
            let id = self.alloc_id();
            let node = match self.index.get(&record.normalized_name()) {
                Some(managed) => HierarchyNode::new(id, &record.name, NodeKind::Manager)
                    .with_members(vec![record.clone()])
                    .with_count(managed.report_count()),
                None => HierarchyNode::new(id, &record.name, NodeKind::Employee).with_members(vec![record.clone()]),
            };
            self.snapshot.push_node(node.with_description(record.full_label()));
            if let Some(parent) = parent {
                self.snapshot.push_link(parent, id);
            }
            parent = Some(id);
        }

        if let Some(selected) = parent {
            self.add_groups(selected, Some(selected), &entry.reports, false)?;
        }

        info!(
            "Built hierarchy for manager '{}' in {}: {} levels above, {} nodes",
            entry.manager.name,
            self.department,
            chain.len().saturating_sub(1),
            self.snapshot.node_count()
        );
        Ok(self.snapshot)
    }

    /// Filter by location, reject empty input, index managers
    fn prepare(&mut self) -> GraphResult<()> {
        if let Some(location) = &self.location {
            self.employees.retain(|e| &e.location == location);
        }
        if self.employees.is_empty() {
            return Err(GraphError::EmptyResult {
                department: self.department.clone(),
                location: self.location.clone(),
            });
        }

        self.index = ManagerIndex::build(&self.employees, &self.department);
        self.roster = Roster::from_records(&self.employees);
        self.snapshot = HierarchySnapshot::new();
        self.next_id = 0;
        self.processed.clear();
        self.manager_nodes.clear();
        Ok(())
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place `key` under its own manager's node, placing that chain first
    ///
    /// Walks upward to the first manager that already has a node (or to the
    /// root), then attaches the pending managers top-down. A key met again
    /// on the walk means a cycle; the chain then hangs under the root.
    fn place_manager(&mut self, key: &str, root: NodeId) -> GraphResult<()> {
        let mut pending: Vec<String> = Vec::new();
        let mut current = key.to_string();

        let anchor = loop {
            if let Some(id) = self.manager_nodes.get(&current) {
                break *id;
            }
            if !self.processed.insert(current.clone()) {
                debug!("Manager '{}' already being placed, attaching chain to root", current);
                break root;
            }
            pending.push(current.clone());
            match self.parent_key(&current) {
                Some(parent) => current = parent,
                None => break root,
            }
        };

        let mut parent = anchor;
        for key in pending.iter().rev() {
            parent = self.attach_manager(key, parent)?;
        }
        Ok(())
    }

    /// Index key of the manager `key` reports to, if that manager is indexed
    fn parent_key(&self, key: &str) -> Option<String> {
        self.index
            .get(key)
            .filter(|entry| entry.manager.has_manager())
            .and_then(|entry| self.index.key_for(&entry.manager.reporting_manager))
            .filter(|parent| *parent != key)
            .map(str::to_string)
    }

    /// Manager node for `key` under `parent`, with its reports grouped beneath
    fn attach_manager(&mut self, key: &str, parent: NodeId) -> GraphResult<NodeId> {
        let entry = self
            .index
            .get(key)
            .cloned()
            .ok_or_else(|| GraphError::ManagerNotFound(key.to_string()))?;

        let name = if entry.manager.name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            entry.manager.name.clone()
        };

        let id = self.alloc_id();
        self.snapshot.push_node(
            HierarchyNode::new(id, name, NodeKind::Manager)
                .with_members(vec![entry.manager.clone()])
                .with_count(entry.report_count())
                .with_description(entry.manager.full_label()),
        );
        self.snapshot.push_link(parent, id);
        self.manager_nodes.insert(key.to_string(), id);

        self.add_groups(id, Some(id), &entry.reports, false)?;
        Ok(id)
    }

    /// Location groups under `parent`, job-role groups under each location
    fn add_groups(
        &mut self,
        parent: NodeId,
        owner: Option<NodeId>,
        records: &[EmployeeRecord],
        top_level: bool,
    ) -> GraphResult<()> {
        for (location, at_location) in group_by_location(records) {
            let location_id = self.alloc_id();
            let description = if top_level {
                format!("{} (Top Level)", location)
            } else {
                format!("{} ({} employees)", location, at_location.len())
            };
            let mut node = HierarchyNode::new(location_id, &location, NodeKind::Location)
                .with_members(at_location.clone())
                .with_description(description);
            if let Some(owner) = owner {
                node = node.with_owner(owner);
            }
            self.snapshot.push_node(node);
            self.snapshot.push_link(parent, location_id);

            for (role, in_role) in group_by_job_role(&at_location) {
                let role_id = self.alloc_id();
                let (kind, description) = if top_level {
                    (NodeKind::TopLevelRole, format!("{} (Top Level)", role))
                } else {
                    (NodeKind::JobRole, format!("{} ({} employees)", role, in_role.len()))
                };
                let mut node = HierarchyNode::new(role_id, &role, kind)
                    .with_members(in_role)
                    .with_description(description);
                if let Some(owner) = owner {
                    node = node.with_owner(owner);
                }
                self.snapshot.push_node(node);
                self.snapshot.push_link(location_id, role_id);
            }
        }
        Ok(())
    }
}

/// Full hierarchy of `employees` in `department`, optionally at one location
pub fn build_department_hierarchy(
    department: &str,
    employees: &[EmployeeRecord],
    location: Option<&str>,
) -> GraphResult<HierarchySnapshot> {
    HierarchyBuilder::new(department, employees)
        .with_location(location.map(str::to_string))
        .build()
}

/// Hierarchy focused on `manager`, optionally at one location
pub fn build_manager_hierarchy(
    department: &str,
    manager: &str,
    employees: &[EmployeeRecord],
    location: Option<&str>,
) -> GraphResult<HierarchySnapshot> {
    HierarchyBuilder::new(department, employees)
        .with_location(location.map(str::to_string))
        .build_for_manager(manager)
}
