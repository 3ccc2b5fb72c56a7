//! Dashboard metrics derived from the board.
//!
//! Pure computation over the column sequence; workflow stages are recognized
//! by conventional column titles ("Todo", "In progress"/"Doing",
//! "Complete"/"Done").

use crate::types::Column;

/// Per-column share of the board
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStat {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Aggregate metrics for the analytics dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct BoardAnalytics {
    pub total_tasks: usize,
    pub complete_tasks: usize,
    pub in_progress_tasks: usize,
    pub todo_tasks: usize,
    pub column_stats: Vec<ColumnStat>,
    /// Percent of tasks in the complete column; 0 for an empty board
    pub completion_rate: f64,
}

impl BoardAnalytics {
    /// Compute metrics from the current column sequence
    pub fn compute(columns: &[Column]) -> Self {
        let total_tasks: usize = columns.iter().map(|c| c.tasks.len()).sum();

        let complete_tasks = stage_count(columns, &["complete", "done"]);
        let in_progress_tasks = stage_count(columns, &["in progress", "doing"]);
        let todo_tasks = stage_count(columns, &["todo", "to do"]);

        let column_stats = columns
            .iter()
            .map(|c| ColumnStat {
                name: c.title.clone(),
                count: c.tasks.len(),
                percentage: if total_tasks == 0 {
                    0.0
                } else {
                    c.tasks.len() as f64 / total_tasks as f64 * 100.0
                },
            })
            .collect();

        let completion_rate = if total_tasks == 0 {
            0.0
        } else {
            complete_tasks as f64 / total_tasks as f64 * 100.0
        };

        Self {
            total_tasks,
            complete_tasks,
            in_progress_tasks,
            todo_tasks,
            column_stats,
            completion_rate,
        }
    }
}

/// Task count of the first column whose title contains any of the markers
fn stage_count(columns: &[Column], markers: &[&str]) -> usize {
    columns
        .iter()
        .find(|c| {
            let title = c.title.to_lowercase();
            markers.iter().any(|m| title.contains(m))
        })
        .map(|c| c.tasks.len())
        .unwrap_or(0)
}
