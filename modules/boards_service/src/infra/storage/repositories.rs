//! SeaORM repository implementations

use super::entity::{board, task};
use super::mapper::{apply_board_patch, apply_task_patch, new_task_active_model};
use crate::contract::{Board, BoardPatch, BoardWithTasks, NewBoard, NewTask, Task, TaskPatch};
use crate::domain::repository::{BoardRepository, TaskRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

// ===== Board Repository =====

pub struct SeaOrmBoardRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBoardRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BoardRepository for SeaOrmBoardRepository {
    async fn find_by_id(&self, board_id: i32) -> Result<Option<Board>> {
        let result = board::Entity::find_by_id(board_id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn find_with_tasks(&self, board_id: i32) -> Result<Option<BoardWithTasks>> {
        let rows = task::Entity::find()
            .find_also_related(board::Entity)
            .filter(task::Column::BoardId.eq(board_id))
            .order_by_asc(task::Column::TaskId)
            .all(&*self.db)
            .await?;

        let joined_board = rows.first().and_then(|(_, board)| board.clone());
        let Some(board) = joined_board else {
            // The join is empty when no task references the board, which
            // does not mean the board is missing.
            let board = board::Entity::find_by_id(board_id).one(&*self.db).await?;
            return Ok(board.map(|b| BoardWithTasks {
                board: b.into(),
                tasks: Vec::new(),
            }));
        };

        Ok(Some(BoardWithTasks {
            board: board.into(),
            tasks: rows.into_iter().map(|(t, _)| t.into()).collect(),
        }))
    }

    async fn create(&self, new_board: &NewBoard) -> Result<Board> {
        let active: board::ActiveModel = new_board.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn update(&self, board_id: i32, patch: &BoardPatch) -> Result<Option<Board>> {
        let Some(existing) = board::Entity::find_by_id(board_id).one(&*self.db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active: board::ActiveModel = existing.into();
        apply_board_patch(&mut active, patch);
        let result = active.update(&*self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, board_id: i32) -> Result<Option<Board>> {
        let Some(existing) = board::Entity::find_by_id(board_id).one(&*self.db).await? else {
            return Ok(None);
        };

        // Tasks go first: a pre-existing tasks table may lack ON DELETE CASCADE
        let txn = self.db.begin().await?;
        task::Entity::delete_many()
            .filter(task::Column::BoardId.eq(board_id))
            .exec(&txn)
            .await?;
        board::Entity::delete_by_id(board_id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Some(existing.into()))
    }

    async fn exists(&self, board_id: i32) -> Result<bool> {
        let count = board::Entity::find_by_id(board_id)
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }
}

// ===== Task Repository =====

pub struct SeaOrmTaskRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTaskRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn find_by_id(&self, task_id: i32) -> Result<Option<Task>> {
        let result = task::Entity::find_by_id(task_id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, board_id: i32, new_task: &NewTask) -> Result<Task> {
        let result = new_task_active_model(board_id, new_task)
            .insert(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn update(&self, task_id: i32, patch: &TaskPatch) -> Result<Option<Task>> {
        let Some(existing) = task::Entity::find_by_id(task_id).one(&*self.db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active: task::ActiveModel = existing.into();
        apply_task_patch(&mut active, patch);
        let result = active.update(&*self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, task_id: i32) -> Result<Option<Task>> {
        let Some(existing) = task::Entity::find_by_id(task_id).one(&*self.db).await? else {
            return Ok(None);
        };

        task::Entity::delete_by_id(task_id).exec(&*self.db).await?;

        Ok(Some(existing.into()))
    }
}
