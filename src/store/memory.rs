//! In-memory document store

use super::{sort_by_field, DocumentStore, IdMinter, Query};
use crate::error::{BoardError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory [`DocumentStore`].
///
/// Collections are keyed by ULID, so iterating a `BTreeMap` yields documents
/// in creation order without an explicit rank field. `delete_many` removes all
/// ids under a single lock, which makes the column-delete cascade atomic on
/// this backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, BTreeMap<String, Value>>>,
    ids: IdMinter,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map(|c| c.len()).unwrap_or(0))
            .unwrap_or(0)
    }

    /// True when the collection is absent or empty
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<String> {
        let id = self.ids.next();
        let mut collections = self
            .collections
            .write()
            .map_err(|_| BoardError::unavailable("store lock poisoned"))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), doc);
        tracing::debug!(collection, id, "inserted document");
        Ok(id)
    }

    async fn list(&self, collection: &str, query: Query) -> Result<Vec<(String, Value)>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| BoardError::unavailable("store lock poisoned"))?;
        let mut docs: Vec<(String, Value)> = collections
            .get(collection)
            .map(|c| {
                c.iter()
                    .filter(|(_, doc)| match &query.filter {
                        Some((field, value)) => doc.get(field) == Some(value),
                        None => true,
                    })
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default();
        if let Some(field) = &query.order_by {
            sort_by_field(&mut docs, field);
        }
        Ok(docs)
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| BoardError::unavailable("store lock poisoned"))?;
        let doc = collections
            .get_mut(collection)
            .and_then(|c| c.get_mut(id))
            .ok_or_else(|| BoardError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        merge_fields(doc, patch);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| BoardError::unavailable("store lock poisoned"))?;
        collections
            .get_mut(collection)
            .and_then(|c| c.remove(id))
            .ok_or_else(|| BoardError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        Ok(())
    }

    async fn delete_many(&self, collection: &str, ids: &[String]) -> Result<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| BoardError::unavailable("store lock poisoned"))?;
        if let Some(c) = collections.get_mut(collection) {
            for id in ids {
                c.remove(id);
            }
        }
        Ok(())
    }
}

/// Shallow merge: top-level fields of `patch` overwrite fields of `doc`
fn merge_fields(doc: &mut Value, patch: Value) {
    if let (Some(doc), Some(patch)) = (doc.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            doc.insert(key.clone(), value.clone());
        }
    }
}
