//! End-to-end board flow against the file-backed store

use std::sync::Arc;
use taskboard::{filter_columns, store::FileStore, BoardAnalytics, BoardState, TaskPatch};
use tempfile::TempDir;

async fn setup() -> (TempDir, BoardState) {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(temp.path().join("board")));
    let mut state = BoardState::new(store);
    state.load().await.unwrap();
    (temp, state)
}

fn titles(state: &BoardState) -> Vec<&str> {
    state.columns().iter().map(|c| c.title.as_str()).collect()
}

#[tokio::test]
async fn test_board_flow_end_to_end() {
    let (_temp, mut state) = setup().await;

    // Seed the three-column board
    let todo = state.add_column("Todo").await.unwrap();
    let doing = state.add_column("In progress").await.unwrap();
    let complete = state.add_column("Complete").await.unwrap();
    assert_eq!(titles(&state), ["Todo", "In progress", "Complete"]);

    let write_spec = state.add_task("Write spec", &todo).await.unwrap();

    // Adding a second task appends after the first
    state.add_task("Review PR", &todo).await.unwrap();
    assert_eq!(state.columns()[0].tasks.len(), 2);

    // Moving "Write spec" into "In progress" leaves "Review PR" behind
    state
        .move_task_between_columns(&write_spec, &todo, &doing, 0)
        .await
        .unwrap();
    assert_eq!(state.columns()[0].tasks.len(), 1);
    assert_eq!(state.columns()[0].tasks[0].content, "Review PR");
    assert_eq!(state.columns()[1].tasks.len(), 1);
    assert_eq!(state.columns()[1].tasks[0].content, "Write spec");
    assert_eq!(state.columns()[1].tasks[0].column_id, doing);

    // Everything survives a reload from the store
    state.load().await.unwrap();
    assert_eq!(titles(&state), ["Todo", "In progress", "Complete"]);
    assert_eq!(state.columns()[1].tasks[0].content, "Write spec");
    assert_eq!(state.task_count(), 2);

    // Finish the task
    state.move_task(&write_spec, &complete).await.unwrap();
    state
        .update_task(&write_spec, TaskPatch::content("Write spec (v2)"))
        .await
        .unwrap();

    let analytics = BoardAnalytics::compute(state.columns());
    assert_eq!(analytics.total_tasks, 2);
    assert_eq!(analytics.complete_tasks, 1);
    assert_eq!(analytics.completion_rate, 50.0);

    // Search narrows tasks but keeps every column visible
    let filtered = filter_columns(state.columns(), "v2");
    assert_eq!(filtered.len(), 3);
    assert!(filtered[0].tasks.is_empty());
    assert_eq!(filtered[2].tasks[0].content, "Write spec (v2)");

    // Cascade delete removes the column and its task
    state.delete_column(&complete).await.unwrap();
    state.load().await.unwrap();
    assert_eq!(titles(&state), ["Todo", "In progress"]);
    assert_eq!(state.task_count(), 1);
}

#[tokio::test]
async fn test_two_sessions_share_one_store() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("board");

    let task;
    {
        let mut writer = BoardState::new(Arc::new(FileStore::new(root.clone())));
        writer.load().await.unwrap();
        let todo = writer.add_column("Todo").await.unwrap();
        task = writer.add_task("Shared task", &todo).await.unwrap();
        // Session-local reordering is not persisted
        writer.add_task("Second", &todo).await.unwrap();
        writer.reorder_tasks(&todo, 1, 0).unwrap();
    }

    let mut reader = BoardState::new(Arc::new(FileStore::new(root)));
    reader.load().await.unwrap();
    assert_eq!(reader.columns().len(), 1);
    // Creation order, not the other session's manual order
    assert_eq!(reader.columns()[0].tasks[0].content, "Shared task");
    assert_eq!(reader.columns()[0].tasks[0].id, task);
    assert_eq!(reader.columns()[0].tasks[1].content, "Second");
}
