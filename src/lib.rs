//! Kanban board state engine with pluggable document-store persistence.
//!
//! The crate keeps an in-memory board model - columns and the tasks they
//! own - consistent with a remote document store across create, update,
//! delete, move and reorder operations. Persistence is behind the
//! [`store::DocumentStore`] trait: an opaque collection-of-JSON-documents
//! store with store-assigned ids, field-equality filters and order-by-field
//! queries. Two backends ship with the crate, in-memory and file-per-document.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskboard::{BoardState, store::MemoryStore};
//!
//! # async fn example() -> taskboard::Result<()> {
//! let mut board = BoardState::new(Arc::new(MemoryStore::new()));
//! board.load().await?;
//!
//! let todo = board.add_column("Todo").await?;
//! let doing = board.add_column("In progress").await?;
//! let task = board.add_task("Write spec", &todo).await?;
//!
//! board.move_task_between_columns(&task, &todo, &doing, 0).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Consistency model
//!
//! Creates wait for the store to assign an id before anything lands in local
//! state. All other mutations are optimistic: local state changes first, and
//! is rolled back to the pre-mutation snapshot if the remote write fails.
//! Intra-column ordering from [`BoardState::reorder_tasks`] is session-local
//! and never persisted; a reload returns tasks in creation order.

pub mod analytics;
pub mod calendar;
mod error;
pub mod search;
mod service;
mod state;
pub mod store;
pub mod types;

pub use analytics::{BoardAnalytics, ColumnStat};
pub use calendar::CalendarService;
pub use error::{BoardError, Result};
pub use search::{filter_columns, Debounced, DEFAULT_SEARCH_DEBOUNCE};
pub use service::BoardService;
pub use state::BoardState;

// Re-export commonly used types
pub use types::{
    CalendarEvent, Column, ColumnId, EventId, EventInput, EventPatch, EventStatus, Priority, Task,
    TaskId, TaskPatch,
};
