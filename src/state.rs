//! Board state container - the authoritative in-memory board model.
//!
//! Owns the canonical `columns` sequence and keeps it consistent with the
//! remote store across add/update/delete/move/reorder operations.
//!
//! Update discipline: creates are remote-first, because ids are assigned by
//! the store and a local entity without a durable id would violate the id
//! invariant. Every other mutation is optimistic - applied locally, then
//! written remotely, and rolled back to the pre-mutation snapshot if the
//! write fails. A failed operation records a fixed per-operation message in
//! `error` and also returns the underlying error; there are no retries.
//!
//! Validation failures (empty trimmed input, unknown ids, out-of-range
//! indices) are rejected before any remote call and never touch `error`.

use crate::error::{BoardError, Result};
use crate::service::BoardService;
use crate::store::DocumentStore;
use crate::types::{Column, ColumnId, Task, TaskId, TaskPatch};
use std::sync::Arc;

/// In-memory board state synchronized with a document store
pub struct BoardState {
    service: BoardService,
    columns: Vec<Column>,
    loading: bool,
    error: Option<String>,
}

impl BoardState {
    /// Create an empty, unloaded board over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            service: BoardService::new(store),
            columns: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// The canonical column sequence
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// True while the initial load is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed operation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the recorded error (the manual retry affordance does this
    /// before calling [`BoardState::load`] again)
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Fetch the full board from the store, replacing local state.
    /// On failure the previous columns are kept as last known good.
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.service.get_columns().await;
        self.loading = false;
        match result {
            Ok(columns) => {
                self.columns = columns;
                self.error = None;
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to fetch board data", e)),
        }
    }

    /// Create a column. Remote-first: the store assigns the id, then the
    /// column is appended locally with an empty task sequence.
    pub async fn add_column(&mut self, title: &str) -> Result<ColumnId> {
        let title = non_empty(title, "title")?;
        match self.service.add_column(title).await {
            Ok(id) => {
                self.columns.push(Column::new(id.clone(), title));
                Ok(id)
            }
            Err(e) => Err(self.fail("Failed to add column", e)),
        }
    }

    /// Rename a column. Optimistic: the title is replaced locally and
    /// restored if the remote update fails.
    pub async fn update_column(&mut self, id: &ColumnId, title: &str) -> Result<()> {
        let title = non_empty(title, "title")?;
        let index = self.column_index(id)?;

        let previous = std::mem::replace(&mut self.columns[index].title, title.to_string());
        if let Err(e) = self.service.update_column(id, title).await {
            self.columns[index].title = previous;
            return Err(self.fail("Failed to update column", e));
        }
        Ok(())
    }

    /// Delete a column and all its tasks. The local column (tasks included)
    /// is removed optimistically and reinserted at its old position if the
    /// remote cascade fails, so callers observe all-or-nothing.
    pub async fn delete_column(&mut self, id: &ColumnId) -> Result<()> {
        let index = self.column_index(id)?;

        let removed = self.columns.remove(index);
        if let Err(e) = self.service.delete_column(id).await {
            self.columns.insert(index, removed);
            return Err(self.fail("Failed to delete column", e));
        }
        Ok(())
    }

    /// Create a task in a column. Remote-first: the store assigns both the
    /// id and the creation timestamp, and the local task carries the stored
    /// values.
    pub async fn add_task(&mut self, content: &str, column_id: &ColumnId) -> Result<TaskId> {
        let content = non_empty(content, "content")?;
        let index = self.column_index(column_id)?;

        match self.service.add_task(content, column_id).await {
            Ok((id, created_at)) => {
                let task = Task::new(id.clone(), content, column_id.clone(), created_at);
                self.columns[index].tasks.push(task);
                Ok(id)
            }
            Err(e) => Err(self.fail("Failed to add task", e)),
        }
    }

    /// Shallow-merge a patch into a task wherever it currently lives.
    /// Optimistic with rollback of the task's previous field values.
    pub async fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> Result<()> {
        if let Some(content) = &patch.content {
            non_empty(content, "content")?;
        }
        let (col, pos) = self.locate_task(id)?;

        let previous = self.columns[col].tasks[pos].clone();
        self.columns[col].tasks[pos].apply(&patch);
        if let Err(e) = self.service.update_task(id, &patch).await {
            self.columns[col].tasks[pos] = previous;
            return Err(self.fail("Failed to update task", e));
        }
        Ok(())
    }

    /// Delete a task from whichever column contains it. Optimistic; the
    /// task is reinserted at its old position on failure.
    pub async fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        let (col, pos) = self.locate_task(id)?;

        let removed = self.columns[col].tasks.remove(pos);
        if let Err(e) = self.service.delete_task(id).await {
            self.columns[col].tasks.insert(pos, removed);
            return Err(self.fail("Failed to delete task", e));
        }
        Ok(())
    }

    /// Transfer a task to the end of another column. Optimistic; the whole
    /// board snapshot is restored on failure.
    pub async fn move_task(&mut self, id: &TaskId, new_column: &ColumnId) -> Result<()> {
        let dest = self.column_index(new_column)?;
        let (col, pos) = self.locate_task(id)?;

        let snapshot = self.columns.clone();
        let mut task = self.columns[col].tasks.remove(pos);
        task.column_id = new_column.clone();
        self.columns[dest].tasks.push(task);

        if let Err(e) = self.service.move_task(id, new_column).await {
            self.columns = snapshot;
            return Err(self.fail("Failed to move task", e));
        }
        Ok(())
    }

    /// Move a task within its column from `source_index` to
    /// `destination_index`. Local-only: intra-column order is never
    /// persisted, so a reload falls back to creation order.
    pub fn reorder_tasks(
        &mut self,
        column_id: &ColumnId,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        let index = self.column_index(column_id)?;
        let tasks = &mut self.columns[index].tasks;
        let len = tasks.len();
        if source_index >= len {
            return Err(BoardError::IndexOutOfRange { index: source_index, len });
        }
        if destination_index >= len {
            return Err(BoardError::IndexOutOfRange { index: destination_index, len });
        }

        let task = tasks.remove(source_index);
        tasks.insert(destination_index, task);
        Ok(())
    }

    /// Transfer a task from one column to a position in another, as drag
    /// gestures do when crossing column boundaries. The destination index is
    /// clamped to the destination sequence's bounds. Each call performs one
    /// remote write; rapid drag-over crossings each pay that round-trip.
    pub async fn move_task_between_columns(
        &mut self,
        id: &TaskId,
        source_column: &ColumnId,
        destination_column: &ColumnId,
        destination_index: usize,
    ) -> Result<()> {
        let source = self.column_index(source_column)?;
        let dest = self.column_index(destination_column)?;
        let pos = self.columns[source]
            .task_index(id)
            .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })?;

        let snapshot = self.columns.clone();
        let mut task = self.columns[source].tasks.remove(pos);
        task.column_id = destination_column.clone();
        let insert_at = destination_index.min(self.columns[dest].tasks.len());
        self.columns[dest].tasks.insert(insert_at, task);

        if let Err(e) = self.service.move_task(id, destination_column).await {
            self.columns = snapshot;
            return Err(self.fail("Failed to move task between columns", e));
        }
        Ok(())
    }

    fn column_index(&self, id: &ColumnId) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })
    }

    fn locate_task(&self, id: &TaskId) -> Result<(usize, usize)> {
        for (col, column) in self.columns.iter().enumerate() {
            if let Some(pos) = column.task_index(id) {
                return Ok((col, pos));
            }
        }
        Err(BoardError::TaskNotFound { id: id.to_string() })
    }

    /// Record a failed remote operation: fixed message in `error`, cause in
    /// the log, underlying error returned to the caller
    fn fail(&mut self, message: &str, err: BoardError) -> BoardError {
        tracing::error!(error = %err, "{message}");
        self.error = Some(message.to_string());
        err
    }
}

fn non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::invalid_value(field, "must not be empty"));
    }
    Ok(trimmed)
}
