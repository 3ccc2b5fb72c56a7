//! Board service: entity <-> document mapping over a [`DocumentStore`].
//!
//! Pure I/O translation, no board logic. The state container in
//! [`crate::state`] decides what to do with the results.

use crate::error::Result;
use crate::store::{DocumentStore, Query};
use crate::types::{Column, ColumnId, Task, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

pub(crate) const COLUMNS: &str = "columns";
pub(crate) const TASKS: &str = "tasks";

/// Maps columns and tasks to their document forms
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn DocumentStore>,
}

impl BoardService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch all columns, each with its tasks ordered by creation time
    pub async fn get_columns(&self) -> Result<Vec<Column>> {
        let column_docs = self.store.list(COLUMNS, Query::all()).await?;
        let mut columns = Vec::with_capacity(column_docs.len());

        for (id, doc) in column_docs {
            let mut column: Column = serde_json::from_value(doc)?;
            column.id = ColumnId::from_string(&id);

            let task_docs = self
                .store
                .list(
                    TASKS,
                    Query::all().filter_eq("columnId", id).order_by("createdAt"),
                )
                .await?;
            for (task_id, task_doc) in task_docs {
                let mut task: Task = serde_json::from_value(task_doc)?;
                task.id = TaskId::from_string(task_id);
                column.tasks.push(task);
            }
            columns.push(column);
        }
        Ok(columns)
    }

    /// Create a column document, returning the store-assigned id
    pub async fn add_column(&self, title: &str) -> Result<ColumnId> {
        let id = self.store.insert(COLUMNS, json!({ "title": title })).await?;
        Ok(ColumnId::from_string(id))
    }

    /// Replace a column's title
    pub async fn update_column(&self, id: &ColumnId, title: &str) -> Result<()> {
        self.store
            .update(COLUMNS, id.as_str(), json!({ "title": title }))
            .await
    }

    /// Cascade-delete a column: all tasks whose `columnId` matches, then the
    /// column itself. Task deletion uses the store's batch primitive.
    pub async fn delete_column(&self, id: &ColumnId) -> Result<()> {
        let task_docs = self
            .store
            .list(TASKS, Query::all().filter_eq("columnId", id.as_str()))
            .await?;
        let task_ids: Vec<String> = task_docs.into_iter().map(|(id, _)| id).collect();
        self.store.delete_many(TASKS, &task_ids).await?;
        self.store.delete(COLUMNS, id.as_str()).await
    }

    /// Create a task document. The creation timestamp is assigned here, at
    /// write time, and returned so callers use the stored value rather than
    /// stamping their own.
    pub async fn add_task(
        &self,
        content: &str,
        column_id: &ColumnId,
    ) -> Result<(TaskId, DateTime<Utc>)> {
        let created_at = Utc::now();
        let id = self
            .store
            .insert(
                TASKS,
                json!({
                    "content": content,
                    "columnId": column_id.as_str(),
                    "createdAt": created_at.timestamp_millis(),
                }),
            )
            .await?;
        Ok((TaskId::from_string(id), created_at))
    }

    /// Merge the patch's fields into a task document
    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<()> {
        self.store
            .update(TASKS, id.as_str(), serde_json::to_value(patch)?)
            .await
    }

    /// Delete a task document
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.store.delete(TASKS, id.as_str()).await
    }

    /// Re-assign a task's owning column
    pub async fn move_task(&self, id: &TaskId, new_column: &ColumnId) -> Result<()> {
        self.store
            .update(TASKS, id.as_str(), json!({ "columnId": new_column.as_str() }))
            .await
    }
}
