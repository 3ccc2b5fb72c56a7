//! File-backed document store
//!
//! One JSON file per document: `<root>/<collection>/<id>.json`. Ids are
//! ULIDs, so directory listings sorted by filename come back in creation
//! order.

use super::{sort_by_field, DocumentStore, IdMinter, Query};
use crate::error::{BoardError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// [`DocumentStore`] backed by a directory tree.
///
/// `delete_many` issues one filesystem delete per id with no rollback, so a
/// failure part-way leaves some documents removed. Callers reconcile on the
/// next full read.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    ids: IdMinter,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ids: IdMinter::default(),
        }
    }

    /// The root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    fn doc_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", id))
    }

    async fn read_doc(&self, collection: &str, id: &str) -> Result<Value> {
        let path = self.doc_path(collection, id);
        let bytes = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoardError::DocumentNotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                }
            } else {
                BoardError::Io(e)
            }
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_doc(&self, collection: &str, id: &str, doc: &Value) -> Result<()> {
        fs::create_dir_all(self.collection_dir(collection)).await?;
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(self.doc_path(collection, id), json).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<String> {
        let id = self.ids.next();
        self.write_doc(collection, &id, &doc).await?;
        tracing::debug!(collection, id, "wrote document");
        Ok(id)
    }

    async fn list(&self, collection: &str, query: Query) -> Result<Vec<(String, Value)>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        // ULID filenames sort by creation time
        ids.sort();

        let mut docs = Vec::with_capacity(ids.len());
        for id in ids {
            let doc = self.read_doc(collection, &id).await?;
            let matches = match &query.filter {
                Some((field, value)) => doc.get(field) == Some(value),
                None => true,
            };
            if matches {
                docs.push((id, doc));
            }
        }
        if let Some(field) = &query.order_by {
            sort_by_field(&mut docs, field);
        }
        Ok(docs)
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<()> {
        let mut doc = self.read_doc(collection, id).await?;
        if let (Some(doc), Some(patch)) = (doc.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                doc.insert(key.clone(), value.clone());
            }
        }
        self.write_doc(collection, id, &doc).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let path = self.doc_path(collection, id);
        fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoardError::DocumentNotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                }
            } else {
                BoardError::Io(e)
            }
        })
    }

    async fn delete_many(&self, collection: &str, ids: &[String]) -> Result<()> {
        for id in ids {
            self.delete(collection, id).await?;
        }
        Ok(())
    }
}
