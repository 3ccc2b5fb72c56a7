//! Task type: a single work item belonging to exactly one column

use super::ids::{ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board.
///
/// The document form is `{ content, columnId, createdAt }` with the timestamp
/// as epoch milliseconds; the id is the store key, not a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip)]
    pub id: TaskId,
    pub content: String,
    /// Must always equal the id of the column whose sequence contains this task
    pub column_id: ColumnId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task with the given content and owning column
    pub fn new(
        id: TaskId,
        content: impl Into<String>,
        column_id: ColumnId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            column_id,
            created_at,
        }
    }

    /// Apply a partial update in place (shallow merge: present fields overwrite)
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(column_id) = &patch.column_id {
            self.column_id = column_id.clone();
        }
    }
}

/// Partial task update. Serializes only the fields that are present, so it
/// doubles as the document patch sent to the store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

impl TaskPatch {
    /// Patch that replaces the content
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that re-assigns the owning column
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            ..Self::default()
        }
    }

    /// True when no fields are set
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.column_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        Task::new(
            TaskId::from_string("t1"),
            "Write spec",
            ColumnId::from_string("todo"),
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        )
    }

    #[test]
    fn test_document_form_uses_epoch_millis() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["content"], "Write spec");
        assert_eq!(json["columnId"], "todo");
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        // The id is the store key, never a document field
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_apply_patch_overwrites_present_fields() {
        let mut task = sample();
        task.apply(&TaskPatch::content("Review PR"));
        assert_eq!(task.content, "Review PR");
        assert_eq!(task.column_id.as_str(), "todo");

        task.apply(&TaskPatch::column("doing"));
        assert_eq!(task.content, "Review PR");
        assert_eq!(task.column_id.as_str(), "doing");
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let json = serde_json::to_value(TaskPatch::content("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "content": "x" }));
        assert!(TaskPatch::default().is_empty());
    }
}
