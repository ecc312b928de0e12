//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::{BoardsError, Resource};
pub use model::{Board, BoardPatch, BoardWithTasks, NewBoard, NewTask, Task, TaskPatch};
