//! Contract models for boards service
//!
//! These models are transport-agnostic.
//! NO serde derives - these are pure domain models.

/// A board, the owner of zero or more tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Store-generated identifier
    pub board_id: i32,
    /// Display name (up to 255 characters)
    pub board_name: Option<String>,
    /// Free-text description (up to 255 characters)
    pub board_description: Option<String>,
}

/// A task that belongs to exactly one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Store-generated identifier
    pub task_id: i32,
    /// Display name (up to 255 characters)
    pub task_name: Option<String>,
    /// Free-text description (up to 255 characters)
    pub task_description: Option<String>,
    /// Icon code (up to 20 characters)
    pub task_icon: Option<String>,
    /// Free-form status label (up to 20 characters)
    pub task_status: Option<String>,
    /// Owning board
    pub board_id: i32,
}

/// A board together with every task that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardWithTasks {
    pub board: Board,
    /// Ordered by `task_id`
    pub tasks: Vec<Task>,
}

/// Fields for inserting a new board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBoard {
    pub board_name: Option<String>,
    pub board_description: Option<String>,
}

/// Fields for inserting a new task; the owning board is passed separately
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub task_name: Option<String>,
    pub task_description: Option<String>,
    pub task_icon: Option<String>,
    pub task_status: Option<String>,
}

/// Partial board update.
///
/// The outer `Option` says whether the field was supplied at all; the inner
/// one is the new (nullable) column value. `None` leaves the column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    pub board_name: Option<Option<String>>,
    pub board_description: Option<Option<String>>,
}

impl BoardPatch {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.board_name.is_none() && self.board_description.is_none()
    }

    /// Apply the supplied fields onto an existing board
    pub fn apply_to(&self, board: &mut Board) {
        if let Some(name) = &self.board_name {
            board.board_name.clone_from(name);
        }
        if let Some(description) = &self.board_description {
            board.board_description.clone_from(description);
        }
    }
}

/// Partial task update, same tri-state rules as [`BoardPatch`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub task_name: Option<Option<String>>,
    pub task_description: Option<Option<String>>,
    pub task_icon: Option<Option<String>>,
    pub task_status: Option<Option<String>>,
}

impl TaskPatch {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.task_description.is_none()
            && self.task_icon.is_none()
            && self.task_status.is_none()
    }

    /// Apply the supplied fields onto an existing task
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(name) = &self.task_name {
            task.task_name.clone_from(name);
        }
        if let Some(description) = &self.task_description {
            task.task_description.clone_from(description);
        }
        if let Some(icon) = &self.task_icon {
            task.task_icon.clone_from(icon);
        }
        if let Some(status) = &self.task_status {
            task.task_status.clone_from(status);
        }
    }
}
