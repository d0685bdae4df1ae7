//! File-backed simulation store.
//!
//! A directory of JSON documents, one per simulation, keyed by a
//! generated 20-character alphanumeric id (the same shape the hosted
//! document store used). Purely local; the estimator itself never
//! touches this module.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::distributions::Alphanumeric;
use thiserror::Error;

use crate::record::SimulationRecord;

/// Length of generated document ids.
const ID_LEN: usize = 20;

/// Errors raised by the store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no simulation with id {0}")]
    NotFound(String),
    #[error("invalid simulation id {0:?}")]
    InvalidId(String),
}

/// Generate a random 20-character alphanumeric document id.
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

/// A directory of simulation record documents.
#[derive(Clone, Debug)]
pub struct SimulationStore {
    dir: PathBuf,
}

impl SimulationStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Root directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a record under its own id, overwriting any previous
    /// document with the same id. Returns the id for convenience.
    pub fn save(&self, record: &SimulationRecord) -> Result<String, StoreError> {
        let path = self.document_path(&record.id)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(path, json)?;
        Ok(record.id.clone())
    }

    /// Load a record by id.
    pub fn load(&self, id: &str) -> Result<SimulationRecord, StoreError> {
        let path = self.document_path(id)?;
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Delete a record by id.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.document_path(id)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List all stored simulation ids, sorted.
    pub fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Document path for an id. Ids are restricted to alphanumerics,
    /// hyphen and underscore so they can never escape the store
    /// directory.
    fn document_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}
