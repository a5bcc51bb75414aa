//! Read-only record stores and the sources they are loaded from.
//!
//! A [`RecordStore`] is filled exactly once from a [`CatalogSource`] and is
//! immutable afterwards. Cloning a store only clones an `Arc`, so every request
//! handler reads the same records without locking.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::query::{Query, search};
use super::record::Record;
use crate::domain::RecordId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate record id {id} in catalog '{catalog}' ({title})")]
    DuplicateId {
        id: RecordId,
        catalog: String,
        title: String,
    },

    #[error("Record '{title}' in catalog '{catalog}' has id 0; ids start at 1")]
    ZeroId { catalog: String, title: String },
}

/// Where a catalog's records come from.
pub trait CatalogSource<R>: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<R>, CatalogError>;
}

/// Records compiled into the binary. Loading cannot fail.
pub struct StaticSource<R> {
    name: &'static str,
    records: fn() -> Vec<R>,
}

impl<R> StaticSource<R> {
    #[must_use]
    pub const fn new(name: &'static str, records: fn() -> Vec<R>) -> Self {
        Self { name, records }
    }
}

impl<R: Record> CatalogSource<R> for StaticSource<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self) -> Result<Vec<R>, CatalogError> {
        Ok((self.records)())
    }
}

/// A JSON array of records on disk, read once at startup.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl<R: Record + DeserializeOwned> CatalogSource<R> for JsonFileSource {
    fn name(&self) -> &str {
        self.path.to_str().unwrap_or("json file")
    }

    fn load(&self) -> Result<Vec<R>, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Arc<[R]>,
}

impl<R: Record> RecordStore<R> {
    /// Loads every record from `source`, rejecting duplicate ids.
    pub fn load(source: &dyn CatalogSource<R>) -> Result<Self, CatalogError> {
        let records = source.load()?;
        let store = Self::from_records(source.name(), records)?;
        info!(
            catalog = source.name(),
            records = store.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    pub fn from_records(name: &str, records: Vec<R>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id().value() == 0 {
                return Err(CatalogError::ZeroId {
                    catalog: name.to_string(),
                    title: record.title().to_string(),
                });
            }
            if !seen.insert(record.id()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id(),
                    catalog: name.to_string(),
                    title: record.title().to_string(),
                });
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Every record, in declaration order.
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self, query: &Query<R::Key>) -> Vec<R> {
        let results = search(&self.records, query);
        debug!(
            query = query.text.as_str(),
            matched = results.len(),
            total = self.len(),
            "Catalog search"
        );
        results
    }
}
