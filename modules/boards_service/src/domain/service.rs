//! Domain service - business logic orchestration

use super::repository::{BoardRepository, TaskRepository};
use crate::contract::{
    Board, BoardPatch, BoardWithTasks, BoardsError, NewBoard, NewTask, Task, TaskPatch,
};
use std::sync::Arc;

/// Domain service for boards and tasks
pub struct Service {
    board_repo: Arc<dyn BoardRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(board_repo: Arc<dyn BoardRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            board_repo,
            task_repo,
        }
    }

    // ===== Board Operations =====

    /// Get a board by identifier
    pub async fn get_board(&self, board_id: i32) -> Result<Board, BoardsError> {
        self.board_repo
            .find_by_id(board_id)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::board_not_found(board_id))
    }

    /// Get a board with its tasks; an empty board is not an error
    pub async fn get_board_with_tasks(&self, board_id: i32) -> Result<BoardWithTasks, BoardsError> {
        self.board_repo
            .find_with_tasks(board_id)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::board_not_found(board_id))
    }

    /// Create a new board
    pub async fn create_board(&self, board: NewBoard) -> Result<Board, BoardsError> {
        let created = self
            .board_repo
            .create(&board)
            .await
            .map_err(BoardsError::internal)?;

        tracing::info!(board_id = created.board_id, "board created");
        Ok(created)
    }

    /// Apply a partial update to a board
    pub async fn update_board(
        &self,
        board_id: i32,
        patch: BoardPatch,
    ) -> Result<Board, BoardsError> {
        let updated = self
            .board_repo
            .update(board_id, &patch)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::board_not_found(board_id))?;

        tracing::debug!(board_id, "board updated");
        Ok(updated)
    }

    /// Delete a board; its tasks go with it
    pub async fn delete_board(&self, board_id: i32) -> Result<Board, BoardsError> {
        let deleted = self
            .board_repo
            .delete(board_id)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::board_not_found(board_id))?;

        tracing::info!(board_id, "board deleted");
        Ok(deleted)
    }

    // ===== Task Operations =====

    /// Create a task on an existing board
    pub async fn create_task(&self, board_id: i32, task: NewTask) -> Result<Task, BoardsError> {
        let board_exists = self
            .board_repo
            .exists(board_id)
            .await
            .map_err(BoardsError::internal)?;
        if !board_exists {
            return Err(BoardsError::board_not_found(board_id));
        }

        let created = self
            .task_repo
            .create(board_id, &task)
            .await
            .map_err(BoardsError::internal)?;

        tracing::info!(board_id, task_id = created.task_id, "task created");
        Ok(created)
    }

    /// Apply a partial update to a task
    pub async fn update_task(&self, task_id: i32, patch: TaskPatch) -> Result<Task, BoardsError> {
        let updated = self
            .task_repo
            .update(task_id, &patch)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::task_not_found(task_id))?;

        tracing::debug!(task_id, "task updated");
        Ok(updated)
    }

    /// Delete a task
    pub async fn delete_task(&self, task_id: i32) -> Result<Task, BoardsError> {
        let deleted = self
            .task_repo
            .delete(task_id)
            .await
            .map_err(BoardsError::internal)?
            .ok_or_else(|| BoardsError::task_not_found(task_id))?;

        tracing::info!(task_id, board_id = deleted.board_id, "task deleted");
        Ok(deleted)
    }
}
