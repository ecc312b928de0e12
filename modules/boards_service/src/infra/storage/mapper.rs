//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{board, task};
use crate::contract::{Board, BoardPatch, NewBoard, NewTask, Task, TaskPatch};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Board Conversions =====

impl From<board::Model> for Board {
    fn from(entity: board::Model) -> Self {
        Self {
            board_id: entity.board_id,
            board_name: entity.board_name,
            board_description: entity.board_description,
        }
    }
}

impl From<&NewBoard> for board::ActiveModel {
    fn from(model: &NewBoard) -> Self {
        Self {
            board_id: NotSet,
            board_name: Set(model.board_name.clone()),
            board_description: Set(model.board_description.clone()),
        }
    }
}

/// Mark the supplied patch fields as changed on an active model
pub(super) fn apply_board_patch(active: &mut board::ActiveModel, patch: &BoardPatch) {
    if let Some(name) = &patch.board_name {
        active.board_name = Set(name.clone());
    }
    if let Some(description) = &patch.board_description {
        active.board_description = Set(description.clone());
    }
}

// ===== Task Conversions =====

impl From<task::Model> for Task {
    fn from(entity: task::Model) -> Self {
        Self {
            task_id: entity.task_id,
            task_name: entity.task_name,
            task_description: entity.task_description,
            task_icon: entity.task_icon,
            task_status: entity.task_status,
            board_id: entity.board_id,
        }
    }
}

/// Build the insert model for a task owned by `board_id`
pub(super) fn new_task_active_model(board_id: i32, model: &NewTask) -> task::ActiveModel {
    task::ActiveModel {
        task_id: NotSet,
        task_name: Set(model.task_name.clone()),
        task_description: Set(model.task_description.clone()),
        task_icon: Set(model.task_icon.clone()),
        task_status: Set(model.task_status.clone()),
        board_id: Set(board_id),
    }
}

pub(super) fn apply_task_patch(active: &mut task::ActiveModel, patch: &TaskPatch) {
    if let Some(name) = &patch.task_name {
        active.task_name = Set(name.clone());
    }
    if let Some(description) = &patch.task_description {
        active.task_description = Set(description.clone());
    }
    if let Some(icon) = &patch.task_icon {
        active.task_icon = Set(icon.clone());
    }
    if let Some(status) = &patch.task_status {
        active.task_status = Set(status.clone());
    }
}
