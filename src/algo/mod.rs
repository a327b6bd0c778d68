//! Tree algorithms over hierarchy snapshots
//!
//! `common` holds the dense CSR view; `metrics` sizes the layout canvas.

pub mod common;
pub mod metrics;

pub use common::TreeView;
pub use metrics::{breadth, depth, level_widths, TreeMetrics};
