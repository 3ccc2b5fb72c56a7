//! Column type: a named, ordered grouping of tasks

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// A column on the board.
///
/// The document form is just `{ title }`; the task sequence is assembled by
/// the service from a per-column query and maintained in memory afterwards.
/// Task order within the sequence is significant only for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(skip)]
    pub id: ColumnId,
    pub title: String,
    #[serde(skip)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create a column with an empty task sequence
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Find a task by id
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Position of a task within the sequence
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

/// Locate the column currently owning a task, searching the whole board
pub fn find_owning_column<'a>(columns: &'a [Column], task_id: &TaskId) -> Option<&'a Column> {
    columns.iter().find(|c| c.find_task(task_id).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_column_document_form() {
        let col = Column::new(ColumnId::from_string("c1"), "Todo");
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Todo" }));
    }

    #[test]
    fn test_find_owning_column() {
        let mut col = Column::new(ColumnId::from_string("c1"), "Todo");
        col.tasks.push(Task::new(
            TaskId::from_string("t1"),
            "Write spec",
            col.id.clone(),
            Utc::now(),
        ));
        let columns = vec![col, Column::new(ColumnId::from_string("c2"), "Done")];

        let owner = find_owning_column(&columns, &TaskId::from_string("t1")).unwrap();
        assert_eq!(owner.id.as_str(), "c1");
        assert!(find_owning_column(&columns, &TaskId::from_string("nope")).is_none());
        assert_eq!(columns[0].task_index(&TaskId::from_string("t1")), Some(0));
    }
}
