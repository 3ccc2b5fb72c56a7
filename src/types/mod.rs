//! Core types for the board engine

mod column;
mod event;
mod ids;
mod task;

// Re-export all types
pub use column::{find_owning_column, Column};
pub use event::{CalendarEvent, EventInput, EventPatch, EventStatus, Priority};
pub use ids::{ColumnId, EventId, TaskId};
pub use task::{Task, TaskPatch};
