//! Hierarchy mutation
//!
//! Structural edits (add, delete) and the UI-driven state changes
//! (expand/collapse) applied to a live snapshot.

pub mod edit;
pub mod expansion;

pub use edit::{add_node, delete_node, DeleteMode, NewNode};
pub use expansion::{collect_employees, toggle_expansion};
