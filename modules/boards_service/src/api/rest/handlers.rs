//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::*;
use crate::contract::BoardsError;
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;

// ===== Board Handlers =====

/// Get a board with all of its tasks
pub async fn get_board(
    service: Arc<Service>,
    Path(board_id): Path<i32>,
) -> Result<Json<BoardWithTasksDto>, BoardsError> {
    let board = service.get_board_with_tasks(board_id).await?;

    Ok(Json(board.into()))
}

/// Create a new board
pub async fn create_board(
    service: Arc<Service>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardDto>), BoardsError> {
    let board = service.create_board(req.into()).await?;

    Ok((StatusCode::CREATED, Json(board.into())))
}

/// Partially update a board
pub async fn update_board(
    service: Arc<Service>,
    Path(board_id): Path<i32>,
    Json(req): Json<UpdateBoardRequest>,
) -> Result<Json<BoardDto>, BoardsError> {
    let board = service.update_board(board_id, req.into()).await?;

    Ok(Json(board.into()))
}

/// Delete a board, returning its last state
pub async fn delete_board(
    service: Arc<Service>,
    Path(board_id): Path<i32>,
) -> Result<Json<BoardDto>, BoardsError> {
    let board = service.delete_board(board_id).await?;

    Ok(Json(board.into()))
}

// ===== Task Handlers =====

/// Create a task on the board in the path
pub async fn create_task(
    service: Arc<Service>,
    Path(board_id): Path<i32>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskDto>), BoardsError> {
    let task = service.create_task(board_id, req.into()).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Partially update a task
pub async fn update_task(
    service: Arc<Service>,
    Path(task_id): Path<i32>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskDto>, BoardsError> {
    let task = service.update_task(task_id, req.into()).await?;

    Ok(Json(task.into()))
}

/// Delete a task, returning its last state
pub async fn delete_task(
    service: Arc<Service>,
    Path(task_id): Path<i32>,
) -> Result<Json<TaskDto>, BoardsError> {
    let task = service.delete_task(task_id).await?;

    Ok(Json(task.into()))
}
