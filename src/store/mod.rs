//! Document store seam.
//!
//! The board and calendar services talk to persistence through the
//! [`DocumentStore`] trait: per-collection CRUD over JSON documents with
//! store-assigned ids, field-equality filtering and order-by-field queries.
//! Two backends are provided: [`MemoryStore`] and the file-per-document
//! [`FileStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use ulid::Ulid;

/// Query over a collection: optional field-equality filter and optional
/// ascending order by a field. Documents missing the order field sort first.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: Option<(String, Value)>,
    pub order_by: Option<String>,
}

impl Query {
    /// Query matching every document in the collection
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only documents whose `field` equals `value`
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = Some((field.into(), value.into()));
        self
    }

    /// Sort ascending by `field`
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }
}

/// Async CRUD over named collections of JSON documents.
///
/// Ids are assigned by the store at insert time; callers never mint them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, returning the store-assigned id
    async fn insert(&self, collection: &str, doc: Value) -> Result<String>;

    /// List documents matching the query as `(id, document)` pairs.
    /// Without an `order_by`, documents come back in creation order.
    async fn list(&self, collection: &str, query: Query) -> Result<Vec<(String, Value)>>;

    /// Shallow-merge `patch`'s top-level fields into an existing document
    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<()>;

    /// Delete a document by id
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Delete several documents. Backends delete atomically where they can;
    /// the file backend deletes sequentially and may fail part-way.
    async fn delete_many(&self, collection: &str, ids: &[String]) -> Result<()>;
}

/// Mints store-assigned document ids: ULIDs forced monotonic so that inserts
/// within the same millisecond still sort in creation order.
#[derive(Debug, Default)]
pub(crate) struct IdMinter {
    last: Mutex<Option<Ulid>>,
}

impl IdMinter {
    pub(crate) fn next(&self) -> String {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let candidate = Ulid::new();
        let id = match *last {
            Some(prev) if candidate <= prev => prev.increment().unwrap_or(candidate),
            _ => candidate,
        };
        *last = Some(id);
        id.to_string()
    }
}

/// Order documents ascending by a field, comparing numbers numerically and
/// everything else by JSON text. Missing fields sort first.
pub(crate) fn sort_by_field(docs: &mut [(String, Value)], field: &str) {
    docs.sort_by(|(_, a), (_, b)| {
        let a = a.get(field);
        let b = b.get(field);
        match (a, b) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(a), Some(b)) => compare_values(a, b),
        }
    });
}

fn compare_values(a: &Value, b: &Value) -> std::cmp::Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
        _ => match (a.as_str(), b.as_str()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_by_numeric_field() {
        let mut docs = vec![
            ("b".to_string(), json!({"createdAt": 300})),
            ("a".to_string(), json!({"createdAt": 100})),
            ("c".to_string(), json!({})),
        ];
        sort_by_field(&mut docs, "createdAt");
        let ids: Vec<&str> = docs.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_string_field() {
        let mut docs = vec![
            ("1".to_string(), json!({"title": "zeta"})),
            ("2".to_string(), json!({"title": "alpha"})),
        ];
        sort_by_field(&mut docs, "title");
        assert_eq!(docs[0].0, "2");
    }

    #[test]
    fn test_id_minter_is_monotonic() {
        let minter = IdMinter::default();
        let mut previous = minter.next();
        for _ in 0..1000 {
            let id = minter.next();
            assert!(id > previous, "{id} should sort after {previous}");
            previous = id;
        }
    }

    #[test]
    fn test_query_builder() {
        let q = Query::all().filter_eq("columnId", "c1").order_by("createdAt");
        assert_eq!(q.filter, Some(("columnId".into(), json!("c1"))));
        assert_eq!(q.order_by.as_deref(), Some("createdAt"));
    }
}
