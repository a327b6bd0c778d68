//! Local persistence
//!
//! A single JSON document holds every dataset with its selections, saved
//! node positions, layout settings and working snapshot.

pub mod dataset;
pub mod store;

pub use dataset::{Dataset, Position};
pub use store::{DatasetStore, StoreError, StoreResult};
