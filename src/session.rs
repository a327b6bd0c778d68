//! Application state
//!
//! A `Session` owns the dataset store and everything the user has selected
//! or edited. Every operation goes through it, leaves a status message
//! behind, and persists the store before returning.
//!
//! Rebuild failures (empty filter result, unknown manager) leave the
//! previous snapshot in place. Edits are validated before anything changes.

use crate::algo::TreeMetrics;
use crate::config::{LayoutSettings, SessionConfig};
use crate::error::{OrgError, OrgResult};
use crate::gesture::{ClickClassifier, Gesture};
use crate::graph::{EmployeeRecord, GraphError, HierarchySnapshot, NodeId, NodeKind};
use crate::hierarchy::{managers_above, HierarchyBuilder, ManagerIndex, SummaryStats};
use crate::ingest::{self, import_files, ImportReport};
use crate::matching::Roster;
use crate::mutation::{self, collect_employees, toggle_expansion, DeleteMode, NewNode};
use crate::persistence::{Dataset, DatasetStore, Position};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Last user-visible outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage { kind: StatusKind::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// What a click on a node resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Edit mode, or a node kind clicks do nothing for
    Ignored,
    /// Single click on an expandable node
    Toggled { node: NodeId, expanded: bool },
    /// Double click on an expandable node: everyone underneath
    Aggregated { node: NodeId, title: String, employees: Vec<EmployeeRecord> },
    /// Click on an employee node
    Details { node: NodeId, members: Vec<EmployeeRecord> },
}

/// A manager offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerChoice {
    pub name: String,
    pub direct_reports: usize,
    pub placeholder: bool,
}

/// Department, manager and location filters of one dataset
#[derive(Debug, Clone, Default)]
struct Selection {
    department: Option<String>,
    manager: Option<String>,
    location: Option<String>,
}

impl Selection {
    fn of(dataset: &Dataset) -> Self {
        Selection {
            department: dataset.current_department.clone(),
            manager: dataset.current_manager.clone(),
            location: dataset.current_location.clone(),
        }
    }

    fn store_into(&self, dataset: &mut Dataset) {
        dataset.current_department = self.department.clone();
        dataset.current_manager = self.manager.clone();
        dataset.current_location = self.location.clone();
    }
}

pub struct Session {
    store: DatasetStore,
    clicks: ClickClassifier,
    edit_mode: bool,
    status: Option<StatusMessage>,
}

impl Session {
    /// Open the configured store (or an in-memory one)
    pub fn open(config: SessionConfig) -> OrgResult<Self> {
        let store = match &config.store_path {
            Some(path) => DatasetStore::open(path)?,
            None => DatasetStore::new(),
        };
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: DatasetStore, config: SessionConfig) -> Self {
        Session {
            store,
            clicks: ClickClassifier::new(config.gesture),
            edit_mode: false,
            status: None,
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
    }

    // ---- datasets -------------------------------------------------------

    /// Parse `paths` into a new dataset and make it current
    ///
    /// Files that fail to parse are listed in the report; the import only
    /// fails when no file yields records.
    pub fn import_dataset<P: AsRef<Path>>(&mut self, name: &str, paths: &[P]) -> OrgResult<ImportReport> {
        let result = self.try_import_dataset(name, paths);
        self.track(result)
    }

    fn try_import_dataset<P: AsRef<Path>>(&mut self, name: &str, paths: &[P]) -> OrgResult<ImportReport> {
        let mut report = import_files(paths);
        if report.records.is_empty() {
            return Err(if report.failures.is_empty() {
                OrgError::NothingImported
            } else {
                OrgError::Ingest(report.failures.remove(0))
            });
        }

        self.store.create_dataset(name, report.records.clone())?;
        self.persist()?;

        let mut text = format!("Dataset \"{}\" created and loaded", name.trim());
        if !report.is_clean() {
            text.push_str(&format!(" ({} file(s) skipped)", report.failures.len()));
        }
        self.status = Some(StatusMessage::success(text));
        Ok(report)
    }

    pub fn create_dataset(&mut self, name: &str, employees: Vec<EmployeeRecord>) -> OrgResult<()> {
        let result = self.try_create_dataset(name, employees);
        self.track(result)
    }

    fn try_create_dataset(&mut self, name: &str, employees: Vec<EmployeeRecord>) -> OrgResult<()> {
        self.store.create_dataset(name, employees)?;
        self.persist()?;
        self.status = Some(StatusMessage::success(format!("Dataset \"{}\" created and loaded", name.trim())));
        Ok(())
    }

    pub fn load_dataset(&mut self, name: &str) -> OrgResult<()> {
        let result = self.try_load_dataset(name);
        self.track(result)
    }

    fn try_load_dataset(&mut self, name: &str) -> OrgResult<()> {
        self.store.switch_to(name)?;
        self.clicks.reset();
        self.persist()?;
        self.status = Some(StatusMessage::success(format!("Loaded dataset \"{}\"", name)));
        Ok(())
    }

    /// Remove a stored dataset; deleting the current one leaves none loaded
    pub fn delete_dataset(&mut self, name: &str) -> OrgResult<()> {
        let result = self.try_delete_dataset(name);
        self.track(result)
    }

    fn try_delete_dataset(&mut self, name: &str) -> OrgResult<()> {
        let removed = self.store.delete_dataset(name)?;
        self.clicks.reset();
        self.persist()?;
        info!("Deleted dataset '{}' ({} records)", name, removed.employee_count());
        self.status = Some(StatusMessage::success(format!("Deleted dataset \"{}\"", name)));
        Ok(())
    }

    pub fn dataset(&self) -> OrgResult<&Dataset> {
        self.store.current().ok_or(OrgError::NoDataset)
    }

    fn dataset_mut(&mut self) -> OrgResult<&mut Dataset> {
        self.store.current_mut().ok_or(OrgError::NoDataset)
    }

    // ---- selections -----------------------------------------------------

    pub fn departments(&self) -> OrgResult<Vec<String>> {
        Ok(ingest::departments(&self.dataset()?.employees))
    }

    /// Locations within the selected department
    pub fn locations(&self) -> OrgResult<Vec<String>> {
        let dataset = self.dataset()?;
        let department = dataset.current_department.as_deref().ok_or(OrgError::NoDepartment)?;
        Ok(ingest::locations(&dataset.employees, Some(department)))
    }

    /// Managers of the selected department and location, in index order
    pub fn managers(&self) -> OrgResult<Vec<ManagerChoice>> {
        let (department, employees) = self.scoped_employees()?;
        let index = ManagerIndex::build(&employees, &department);
        Ok(index
            .iter()
            .map(|(_, entry)| ManagerChoice {
                name: entry.manager.name.clone(),
                direct_reports: entry.report_count(),
                placeholder: entry.manager.is_placeholder(),
            })
            .collect())
    }

    /// Select a department; clears the manager and location filters
    pub fn select_department(&mut self, department: Option<&str>) -> OrgResult<()> {
        let result = self.try_select(|selection| {
            selection.department = department.map(str::to_string);
            selection.manager = None;
            selection.location = None;
        });
        self.track(result)
    }

    pub fn select_manager(&mut self, manager: Option<&str>) -> OrgResult<()> {
        let result = self.try_select(|selection| selection.manager = manager.map(str::to_string));
        self.track(result)
    }

    pub fn select_location(&mut self, location: Option<&str>) -> OrgResult<()> {
        let result = self.try_select(|selection| selection.location = location.map(str::to_string));
        self.track(result)
    }

    /// Change the selection; it is only stored once the rebuild succeeds
    fn try_select<F: FnOnce(&mut Selection)>(&mut self, change: F) -> OrgResult<()> {
        let mut selection = Selection::of(self.dataset()?);
        change(&mut selection);
        self.try_apply(selection)
    }

    /// Department name plus its records after the location filter
    fn scoped_employees(&self) -> OrgResult<(String, Vec<EmployeeRecord>)> {
        let dataset = self.dataset()?;
        let department = dataset.current_department.clone().ok_or(OrgError::NoDepartment)?;
        let mut employees = ingest::department_records(&dataset.employees, &department);
        if let Some(location) = &dataset.current_location {
            employees.retain(|e| &e.location == location);
        }
        Ok((department, employees))
    }

    // ---- hierarchy ------------------------------------------------------

    /// Rebuild the snapshot for the current selection
    ///
    /// With no department selected the view is cleared.
    pub fn rebuild(&mut self) -> OrgResult<()> {
        let result = self.try_rebuild();
        self.track(result)
    }

    fn try_rebuild(&mut self) -> OrgResult<()> {
        let selection = Selection::of(self.dataset()?);
        self.try_apply(selection)
    }

    /// Build for `selection`, then store the selection with the snapshot
    fn try_apply(&mut self, selection: Selection) -> OrgResult<()> {
        let Some(department) = selection.department.clone() else {
            let dataset = self.dataset_mut()?;
            selection.store_into(dataset);
            dataset.clear_view();
            return self.persist();
        };

        let employees = ingest::department_records(&self.dataset()?.employees, &department);
        let builder = HierarchyBuilder::new(&department, &employees).with_location(selection.location.clone());
        let snapshot = match &selection.manager {
            Some(manager) => builder.build_for_manager(manager)?,
            None => builder.build()?,
        };

        let next_id = snapshot.next_free_id();
        let node_count = snapshot.node_count();
        let dataset = self.dataset_mut()?;
        selection.store_into(dataset);
        dataset.node_positions.clear();
        dataset.original_snapshot = Some(snapshot.clone());
        dataset.snapshot = Some(snapshot);
        self.store.next_node_id = next_id;
        self.clicks.reset();
        self.persist()?;

        let scope = selection.manager.unwrap_or(department);
        info!("Rebuilt hierarchy for {}: {} nodes", scope, node_count);
        self.status = Some(StatusMessage::success(format!("Showing {} ({} nodes)", scope, node_count)));
        Ok(())
    }

    pub fn snapshot(&self) -> Option<&HierarchySnapshot> {
        self.store.current().and_then(|d| d.snapshot.as_ref())
    }

    fn snapshot_mut(&mut self) -> OrgResult<&mut HierarchySnapshot> {
        self.dataset_mut()?.snapshot.as_mut().ok_or(OrgError::NoHierarchy)
    }

    pub fn metrics(&self) -> Option<TreeMetrics> {
        self.snapshot().map(TreeMetrics::of)
    }

    /// Canvas size for the current snapshot and layout
    pub fn canvas_size(&self) -> Option<(f64, f64)> {
        let dataset = self.store.current()?;
        let metrics = self.metrics()?;
        Some(dataset.layout.canvas_size(metrics.depth, metrics.breadth))
    }

    pub fn summary(&self) -> OrgResult<SummaryStats> {
        let (department, employees) = self.scoped_employees()?;
        let index = ManagerIndex::build(&employees, &department);
        let manager = self.dataset()?.current_manager.clone();
        Ok(SummaryStats::compute(&employees, &index, manager.as_deref()))
    }

    /// Managers above the named employee, nearest first
    pub fn chain_of_command(&self, employee: &str) -> OrgResult<Vec<EmployeeRecord>> {
        let (_, employees) = self.scoped_employees()?;
        let roster = Roster::from_records(&employees);
        let (record, _) = roster
            .resolve(employee, &employees)
            .ok_or_else(|| GraphError::EmployeeNotFound(employee.to_string()))?;
        Ok(managers_above(&record, &employees))
    }

    // ---- edits ----------------------------------------------------------

    fn require_edit_mode(&self) -> OrgResult<()> {
        if self.edit_mode {
            Ok(())
        } else {
            Err(OrgError::EditModeRequired)
        }
    }

    /// Add a node; it gets a saved position below its parent
    pub fn add_node(&mut self, request: NewNode) -> OrgResult<NodeId> {
        let result = self.try_add_node(request);
        self.track(result)
    }

    fn try_add_node(&mut self, request: NewNode) -> OrgResult<NodeId> {
        self.require_edit_mode()?;
        let mut counter = self.store.next_node_id;
        let parent = request.parent;
        let name = request.name.trim().to_string();

        let dataset = self.dataset_mut()?;
        let snapshot = dataset.snapshot.as_mut().ok_or(OrgError::NoHierarchy)?;
        let id = mutation::add_node(snapshot, request, &mut counter)?;

        let position = parent
            .and_then(|p| dataset.node_positions.get(&p).copied())
            .map(|p| Position::new(p.x, p.y + dataset.layout.vertical_spacing))
            .unwrap_or_default();
        dataset.set_position(id, position);

        self.store.next_node_id = counter;
        self.persist()?;
        self.status = Some(StatusMessage::success(format!("Added node '{}'", name)));
        Ok(id)
    }

    /// Delete a node; returns the removed ids (empty when `id` is unknown)
    pub fn delete_node(&mut self, id: NodeId, mode: DeleteMode) -> OrgResult<Vec<NodeId>> {
        let result = self.try_delete_node(id, mode);
        self.track(result)
    }

    fn try_delete_node(&mut self, id: NodeId, mode: DeleteMode) -> OrgResult<Vec<NodeId>> {
        self.require_edit_mode()?;
        let dataset = self.dataset_mut()?;
        let snapshot = dataset.snapshot.as_mut().ok_or(OrgError::NoHierarchy)?;
        let removed = mutation::delete_node(snapshot, id, mode);
        if removed.is_empty() {
            return Ok(removed);
        }
        dataset.forget_positions(removed.iter().copied());

        self.persist()?;
        self.status = Some(StatusMessage::success(format!("Deleted {} node(s)", removed.len())));
        Ok(removed)
    }

    /// Expand or collapse a node; `None` for kinds that do not expand
    pub fn toggle_node(&mut self, id: NodeId) -> OrgResult<Option<bool>> {
        let result = self.try_toggle_node(id);
        self.track(result)
    }

    fn try_toggle_node(&mut self, id: NodeId) -> OrgResult<Option<bool>> {
        let expanded = toggle_expansion(self.snapshot_mut()?, id)?;
        if expanded.is_some() {
            self.persist()?;
        }
        Ok(expanded)
    }

    /// Route a click the way the chart does
    ///
    /// The click is always classified, so a click made in edit mode still
    /// counts as the "previous click" for the next one.
    pub fn handle_click(&mut self, id: NodeId, now_ms: u64) -> OrgResult<ClickOutcome> {
        let result = self.try_handle_click(id, now_ms);
        self.track(result)
    }

    fn try_handle_click(&mut self, id: NodeId, now_ms: u64) -> OrgResult<ClickOutcome> {
        let gesture = self.clicks.classify(now_ms);
        if self.edit_mode {
            return Ok(ClickOutcome::Ignored);
        }

        let snapshot = self.snapshot().ok_or(OrgError::NoHierarchy)?;
        let node = snapshot.get_node(id).ok_or(GraphError::NodeNotFound(id))?;

        match (node.kind, gesture) {
            (NodeKind::Employee, _) => Ok(ClickOutcome::Details { node: id, members: node.members.clone() }),
            (kind, Gesture::Double) if kind.is_expandable() => Ok(ClickOutcome::Aggregated {
                node: id,
                title: format!("All employees under {}", node.name),
                employees: collect_employees(snapshot, id)?,
            }),
            (kind, Gesture::Single) if kind.is_expandable() => {
                let expanded = self.try_toggle_node(id)?.unwrap_or(false);
                Ok(ClickOutcome::Toggled { node: id, expanded })
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }

    /// Drag step: store the node's new position
    pub fn move_node(&mut self, id: NodeId, position: Position) -> OrgResult<()> {
        let result = self.try_move_node(id, position);
        self.track(result)
    }

    fn try_move_node(&mut self, id: NodeId, position: Position) -> OrgResult<()> {
        self.require_edit_mode()?;
        let dataset = self.dataset_mut()?;
        let exists = dataset.snapshot.as_ref().map(|s| s.has_node(id)).unwrap_or(false);
        if !exists {
            return Err(GraphError::NodeNotFound(id).into());
        }
        dataset.set_position(id, position);
        self.persist()
    }

    // ---- layout ---------------------------------------------------------

    pub fn layout(&self) -> OrgResult<&LayoutSettings> {
        Ok(&self.dataset()?.layout)
    }

    pub fn set_layout_sliders(&mut self, node_size: u32, spacing: u32) -> OrgResult<()> {
        let result = self.dataset_mut().map(|dataset| dataset.layout.apply_sliders(node_size, spacing));
        self.track(result)?;
        let result = self.persist();
        self.track(result)
    }

    pub fn save_layout(&mut self) -> OrgResult<()> {
        let result = self.try_save_layout();
        self.track(result)
    }

    fn try_save_layout(&mut self) -> OrgResult<()> {
        let dataset = self.dataset()?;
        if dataset.snapshot.is_none() {
            return Err(OrgError::NoHierarchy);
        }
        let scope = dataset
            .current_manager
            .clone()
            .or_else(|| dataset.current_department.clone())
            .unwrap_or_default();
        self.persist()?;
        self.status = Some(StatusMessage::success(format!("Layout saved for {}", scope)));
        Ok(())
    }

    /// Back to the snapshot as built, with default layout and no saved positions
    pub fn reset_layout(&mut self) -> OrgResult<()> {
        let result = self.try_reset_layout();
        self.track(result)
    }

    fn try_reset_layout(&mut self) -> OrgResult<()> {
        let dataset = self.dataset_mut()?;
        let original = dataset.original_snapshot.clone().ok_or(OrgError::NoHierarchy)?;
        let next_id = original.next_free_id();
        dataset.snapshot = Some(original);
        dataset.node_positions.clear();
        dataset.layout = LayoutSettings::default();

        self.store.next_node_id = next_id;
        self.persist()?;
        self.status = Some(StatusMessage::success("Layout reset to default"));
        Ok(())
    }

    // ---- plumbing -------------------------------------------------------

    fn persist(&mut self) -> OrgResult<()> {
        self.store.save()?;
        Ok(())
    }

    /// Record a failure as the status message and pass the result through
    fn track<T>(&mut self, result: OrgResult<T>) -> OrgResult<T> {
        if let Err(e) = &result {
            warn!("{}", e);
            self.status = Some(StatusMessage::error(e.to_string()));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::new("Alice", "Ops", "JC0001 Director", "Paris", ""),
            EmployeeRecord::new("Bob", "Ops", "JC0002 Lead", "Paris", "Alice"),
            EmployeeRecord::new("Carol", "Ops", "JC0003 Engineer", "Oslo", "Bob"),
            EmployeeRecord::new("Dan", "Eng", "JC0004 Engineer", "Oslo", ""),
        ]
    }

    fn session() -> Session {
        let mut s = Session::open(SessionConfig::in_memory()).unwrap();
        s.create_dataset("q1", employees()).unwrap();
        s.select_department(Some("Ops")).unwrap();
        s
    }

    fn node_named(s: &Session, name: &str) -> NodeId {
        s.snapshot().unwrap().nodes.iter().find(|n| n.name == name).map(|n| n.id).unwrap()
    }

    #[test]
    fn test_select_department_builds() {
        let s = session();
        let snapshot = s.snapshot().unwrap();
        assert_eq!(snapshot.nodes[0].name, "Ops Department");
        assert_eq!(s.store().next_node_id, snapshot.next_free_id());
        assert_eq!(s.status().unwrap().kind, StatusKind::Success);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_snapshot() {
        let mut s = session();
        let before = s.snapshot().unwrap().node_count();

        let err = s.select_location(Some("Rome")).unwrap_err();
        assert!(matches!(err, OrgError::Graph(GraphError::EmptyResult { .. })));
        assert_eq!(s.snapshot().unwrap().node_count(), before);
        assert!(s.status().unwrap().is_error());
        // the rejected filter is not kept
        assert_eq!(s.dataset().unwrap().current_location, None);
        assert_eq!(s.summary().unwrap().total_employees, 3);
        assert_eq!(s.locations().unwrap(), vec!["Paris", "Oslo"]);

        let err = s.select_manager(Some("Zed")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(s.dataset().unwrap().current_manager, None);
        assert_eq!(s.dataset().unwrap().current_department.as_deref(), Some("Ops"));
    }

    #[test]
    fn test_edits_require_edit_mode() {
        let mut s = session();
        let err = s.add_node(NewNode::new("X", NodeKind::Employee)).unwrap_err();
        assert!(matches!(err, OrgError::EditModeRequired));

        s.set_edit_mode(true);
        let id = s.add_node(NewNode::new("X", NodeKind::Employee).under(NodeId::new(0))).unwrap();
        assert_eq!(s.store().next_node_id, id.as_u64() + 1);
        assert!(s.dataset().unwrap().node_positions.contains_key(&id));
    }

    #[test]
    fn test_delete_forgets_positions() {
        let mut s = session();
        s.set_edit_mode(true);
        let bob = node_named(&s, "Bob");
        s.move_node(bob, Position::new(5.0, 5.0)).unwrap();

        let removed = s.delete_node(bob, DeleteMode::Cascade).unwrap();
        assert!(removed.contains(&bob));
        assert!(!s.dataset().unwrap().node_positions.contains_key(&bob));
        assert!(s.delete_node(NodeId::new(999), DeleteMode::Single).unwrap().is_empty());
    }

    #[test]
    fn test_click_routing() {
        let mut s = session();
        let bob = node_named(&s, "Bob");

        let outcome = s.handle_click(bob, 1_000).unwrap();
        assert_eq!(outcome, ClickOutcome::Toggled { node: bob, expanded: true });

        match s.handle_click(bob, 1_100).unwrap() {
            ClickOutcome::Aggregated { employees, title, .. } => {
                assert_eq!(title, "All employees under Bob");
                assert_eq!(employees.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }

        // root is not expandable
        assert_eq!(s.handle_click(NodeId::new(0), 5_000).unwrap(), ClickOutcome::Ignored);

        s.set_edit_mode(true);
        assert_eq!(s.handle_click(bob, 9_000).unwrap(), ClickOutcome::Ignored);
    }

    #[test]
    fn test_reset_layout_restores_original() {
        let mut s = session();
        s.set_edit_mode(true);
        s.add_node(NewNode::new("Temp", NodeKind::Employee)).unwrap();
        s.set_layout_sliders(50, 10).unwrap();

        s.reset_layout().unwrap();
        let dataset = s.dataset().unwrap();
        assert_eq!(dataset.snapshot.as_ref().unwrap().node_count(), dataset.original_snapshot.as_ref().unwrap().node_count());
        assert_eq!(dataset.layout, LayoutSettings::default());
        assert!(dataset.node_positions.is_empty());
    }

    #[test]
    fn test_summary_and_chain() {
        let mut s = session();
        let stats = s.summary().unwrap();
        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.total_managers, 2);

        s.select_manager(Some("Bob")).unwrap();
        let stats = s.summary().unwrap();
        assert_eq!(stats.direct_reports, Some(1));
        assert_eq!(stats.levels_above, Some(1));

        let chain = s.chain_of_command("Carol").unwrap();
        let names: Vec<&str> = chain.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_managers_listing() {
        let s = session();
        let managers = s.managers().unwrap();
        let names: Vec<&str> = managers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete_dataset() {
        let mut s = session();
        s.create_dataset("q2", employees()).unwrap();
        s.delete_dataset("q2").unwrap();
        assert_eq!(s.store().names(), vec!["q1"]);
        assert_eq!(s.status().unwrap().text, "Deleted dataset \"q2\"");

        let err = s.delete_dataset("q2").unwrap_err();
        assert!(err.is_not_found());
        assert!(s.status().unwrap().is_error());
    }

    #[test]
    fn test_no_dataset() {
        let mut s = Session::open(SessionConfig::in_memory()).unwrap();
        assert!(matches!(s.select_department(Some("Ops")), Err(OrgError::NoDataset)));
        assert!(s.status().unwrap().is_error());
    }
}
