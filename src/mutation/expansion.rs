//! Expansion toggles and employee aggregation

use crate::algo::TreeView;
use crate::graph::{EmployeeRecord, GraphError, GraphResult, HierarchySnapshot, NodeId, NodeKind};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Flip a node between expanded and collapsed
///
/// Collapsing hides the node's direct children, and for a manager also
/// every employee node it owns; expanding shows them again. Descendants
/// of a hidden node are hidden through their ancestor. Returns the new
/// `expanded` state, or `None` for kinds that do not expand.
pub fn toggle_expansion(snapshot: &mut HierarchySnapshot, id: NodeId) -> GraphResult<Option<bool>> {
    let node = snapshot.get_node_mut(id).ok_or(GraphError::NodeNotFound(id))?;
    if !node.kind.is_expandable() {
        return Ok(None);
    }

    node.expanded = !node.expanded;
    let expanded = node.expanded;
    let kind = node.kind;

    let mut affected: FxHashSet<NodeId> = snapshot.children_of(id).into_iter().collect();
    if kind == NodeKind::Manager {
        affected.extend(
            snapshot
                .nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Employee && n.owner_manager_id == Some(id))
                .map(|n| n.id),
        );
    }

    for node in snapshot.nodes.iter_mut().filter(|n| affected.contains(&n.id)) {
        node.hidden = !expanded;
    }

    debug!(
        "{} node {} {}, {} node(s) affected",
        kind,
        id,
        if expanded { "expanded" } else { "collapsed" },
        affected.len()
    );
    Ok(Some(expanded))
}

/// Every employee record under a node, without touching UI state
///
/// Gathers the members of each leaf in the node's subtree, so a record
/// grouped under both a location and a job role is counted once. A leaf
/// node contributes its own members.
pub fn collect_employees(snapshot: &HierarchySnapshot, id: NodeId) -> GraphResult<Vec<EmployeeRecord>> {
    if !snapshot.has_node(id) {
        return Err(GraphError::NodeNotFound(id));
    }

    let view = TreeView::from_snapshot(snapshot);
    let mut employees = Vec::new();
    for member_id in view.subtree(id) {
        let Some(idx) = view.index_of(member_id) else {
            continue;
        };
        if view.child_count(idx) > 0 {
            continue;
        }
        if let Some(node) = snapshot.nodes.get(idx) {
            employees.extend(node.members.iter().cloned());
        }
    }
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::build_department_hierarchy;

    fn fixture() -> HierarchySnapshot {
        let employees = vec![
            EmployeeRecord::new("Alice", "Ops", "JC0001 Director", "Paris", ""),
            EmployeeRecord::new("Bob", "Ops", "JC0002 Lead", "Paris", "Alice"),
            EmployeeRecord::new("Carol", "Ops", "JC0003 Engineer", "Oslo", "Bob"),
            EmployeeRecord::new("Dan", "Ops", "JC0004 Designer", "Oslo", "Bob"),
        ];
        build_department_hierarchy("Ops", &employees, None).unwrap()
    }

    fn manager(s: &HierarchySnapshot, name: &str) -> NodeId {
        s.nodes
            .iter()
            .find(|n| n.kind == NodeKind::Manager && n.name == name)
            .map(|n| n.id)
            .unwrap()
    }

    #[test]
    fn test_toggle_twice_hides_then_shows_children() {
        let mut s = fixture();
        let bob = manager(&s, "Bob");
        let oslo = s.children_of(bob)[0];

        assert_eq!(toggle_expansion(&mut s, bob).unwrap(), Some(true));
        assert!(s.is_visible(oslo));

        assert_eq!(toggle_expansion(&mut s, bob).unwrap(), Some(false));
        assert!(s.get_node(oslo).unwrap().hidden);
        // grandchildren hidden through the ancestor
        let engineer = s.children_of(oslo)[0];
        assert!(!s.is_visible(engineer));
        assert!(s.is_visible(bob));
    }

    #[test]
    fn test_toggle_non_expandable_is_noop() {
        let mut s = fixture();
        assert_eq!(toggle_expansion(&mut s, NodeId::new(0)).unwrap(), None);
        assert!(!s.nodes[0].expanded);
    }

    #[test]
    fn test_toggle_unknown_node() {
        let mut s = fixture();
        assert_eq!(toggle_expansion(&mut s, NodeId::new(999)), Err(GraphError::NodeNotFound(NodeId::new(999))));
    }

    #[test]
    fn test_collect_employees_counts_each_record_once() {
        let s = fixture();
        let bob = manager(&s, "Bob");
        let names: Vec<String> = collect_employees(&s, bob).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Carol", "Dan"]);

        let alice = manager(&s, "Alice");
        let under_alice = collect_employees(&s, alice).unwrap();
        let names: Vec<&str> = under_alice.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol", "Dan"]);
    }

    #[test]
    fn test_collect_does_not_mutate() {
        let s = fixture();
        let before = serde_json::to_string(&s).unwrap();
        collect_employees(&s, NodeId::new(0)).unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), before);
    }
}
