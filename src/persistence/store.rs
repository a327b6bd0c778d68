//! Dataset store
//!
//! All datasets, the active dataset name and the node-id counter live in
//! one JSON document. A missing file opens as an empty store.

use super::dataset::Dataset;
use crate::graph::EmployeeRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Dataset store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dataset already exists: {0}")]
    DatasetExists(String),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Dataset name must not be empty")]
    EmptyName,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Named datasets plus the global counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStore {
    #[serde(default)]
    pub datasets: IndexMap<String, Dataset>,

    #[serde(default)]
    pub current_dataset: Option<String>,

    #[serde(default)]
    pub next_node_id: u64,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl DatasetStore {
    /// In-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `path`; loads it when the file exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let mut store = if path.exists() {
            Self::load(path)?
        } else {
            debug!("No dataset store at {:?}, starting empty", path);
            Self::default()
        };
        store.path = Some(path.to_path_buf());
        Ok(store)
    }

    /// Read a store file
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let store: DatasetStore = serde_json::from_str(&text)?;
        info!("Loaded {} dataset(s) from {:?}", store.datasets.len(), path.as_ref());
        Ok(store)
    }

    /// Write to the backing file; a no-op for in-memory stores
    pub fn save(&self) -> StoreResult<()> {
        match &self.path {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Saved dataset store to {:?}", path);
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Add a dataset and make it current
    pub fn create_dataset(&mut self, name: &str, employees: Vec<EmployeeRecord>) -> StoreResult<&mut Dataset> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.datasets.contains_key(name) {
            return Err(StoreError::DatasetExists(name.to_string()));
        }

        info!("Created dataset '{}' with {} records", name, employees.len());
        self.current_dataset = Some(name.to_string());
        Ok(self.datasets.entry(name.to_string()).or_insert(Dataset::new(employees)))
    }

    /// Make `name` the current dataset
    pub fn switch_to(&mut self, name: &str) -> StoreResult<&mut Dataset> {
        match self.datasets.get_mut(name) {
            Some(dataset) => {
                info!("Switched to dataset '{}'", name);
                self.current_dataset = Some(name.to_string());
                Ok(dataset)
            }
            None => Err(StoreError::DatasetNotFound(name.to_string())),
        }
    }

    pub fn delete_dataset(&mut self, name: &str) -> StoreResult<Dataset> {
        let removed = self
            .datasets
            .shift_remove(name)
            .ok_or_else(|| StoreError::DatasetNotFound(name.to_string()))?;
        if self.current_dataset.as_deref() == Some(name) {
            self.current_dataset = None;
        }
        info!("Deleted dataset '{}'", name);
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub fn current(&self) -> Option<&Dataset> {
        self.current_dataset.as_deref().and_then(|name| self.datasets.get(name))
    }

    pub fn current_mut(&mut self) -> Option<&mut Dataset> {
        match self.current_dataset.as_deref() {
            Some(name) => self.datasets.get_mut(name),
            None => None,
        }
    }

    /// Dataset names in creation order
    pub fn names(&self) -> Vec<&str> {
        self.datasets.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
