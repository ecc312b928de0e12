//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Board, BoardPatch, BoardWithTasks, NewBoard, NewTask, Task, TaskPatch};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for boards
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find a board by identifier
    async fn find_by_id(&self, board_id: i32) -> Result<Option<Board>>;

    /// Find a board together with all of its tasks.
    ///
    /// Returns `None` only when the board itself does not exist; a board
    /// without tasks yields an empty task list.
    async fn find_with_tasks(&self, board_id: i32) -> Result<Option<BoardWithTasks>>;

    /// Insert a new board
    async fn create(&self, board: &NewBoard) -> Result<Board>;

    /// Overwrite the supplied fields, `None` if the board does not exist
    async fn update(&self, board_id: i32, patch: &BoardPatch) -> Result<Option<Board>>;

    /// Delete a board and return its prior state
    async fn delete(&self, board_id: i32) -> Result<Option<Board>>;

    /// Check if a board exists
    async fn exists(&self, board_id: i32) -> Result<bool>;
}

/// Repository for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by identifier
    async fn find_by_id(&self, task_id: i32) -> Result<Option<Task>>;

    /// Insert a new task owned by `board_id`
    async fn create(&self, board_id: i32, task: &NewTask) -> Result<Task>;

    /// Overwrite the supplied fields, `None` if the task does not exist
    async fn update(&self, task_id: i32, patch: &TaskPatch) -> Result<Option<Task>>;

    /// Delete a task and return its prior state
    async fn delete(&self, task_id: i32) -> Result<Option<Task>>;
}
