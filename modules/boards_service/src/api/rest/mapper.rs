//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Board conversions =====

impl From<contract::Board> for BoardDto {
    fn from(board: contract::Board) -> Self {
        Self {
            board_id: board.board_id,
            board_name: board.board_name,
            board_description: board.board_description,
        }
    }
}

impl From<contract::BoardWithTasks> for BoardWithTasksDto {
    fn from(value: contract::BoardWithTasks) -> Self {
        let contract::BoardWithTasks { board, tasks } = value;
        Self {
            board_id: board.board_id,
            board_name: board.board_name,
            board_description: board.board_description,
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateBoardRequest> for contract::NewBoard {
    fn from(req: CreateBoardRequest) -> Self {
        Self {
            board_name: req.board_name,
            board_description: req.board_description,
        }
    }
}

impl From<UpdateBoardRequest> for contract::BoardPatch {
    fn from(req: UpdateBoardRequest) -> Self {
        Self {
            board_name: req.board_name,
            board_description: req.board_description,
        }
    }
}

// ===== Task conversions =====

impl From<contract::Task> for TaskDto {
    fn from(task: contract::Task) -> Self {
        Self {
            task_id: task.task_id,
            task_name: task.task_name,
            task_description: task.task_description,
            task_icon: task.task_icon,
            task_status: task.task_status,
            board_id: task.board_id,
        }
    }
}

impl From<contract::Task> for BoardTaskDto {
    fn from(task: contract::Task) -> Self {
        Self {
            task_id: task.task_id,
            task_name: task.task_name,
            task_description: task.task_description,
            task_icon: task.task_icon,
            task_status: task.task_status,
        }
    }
}

impl From<CreateTaskRequest> for contract::NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            task_name: req.task_name,
            task_description: req.task_description,
            task_icon: req.task_icon,
            task_status: req.task_status,
        }
    }
}

impl From<UpdateTaskRequest> for contract::TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            task_name: req.task_name,
            task_description: req.task_description,
            task_icon: req.task_icon,
            task_status: req.task_status,
        }
    }
}
