//! Crate-level error

use crate::graph::GraphError;
use crate::ingest::IngestError;
use crate::persistence::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No dataset loaded")]
    NoDataset,

    #[error("No department selected")]
    NoDepartment,

    #[error("No hierarchy built yet")]
    NoHierarchy,

    #[error("Please enable edit mode first")]
    EditModeRequired,

    #[error("No records could be imported")]
    NothingImported,
}

pub type OrgResult<T> = Result<T, OrgError>;

impl OrgError {
    /// Whether the error means a selected thing is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrgError::Graph(GraphError::NodeNotFound(_))
                | OrgError::Graph(GraphError::ManagerNotFound(_))
                | OrgError::Store(StoreError::DatasetNotFound(_))
        )
    }
}
