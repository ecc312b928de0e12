//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// ===== Board DTOs =====

/// Board response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoardDto {
    /// Board identifier
    #[schema(example = 1)]
    pub board_id: i32,

    /// Board name
    #[schema(example = "Sprint 12")]
    pub board_name: Option<String>,

    /// Board description
    pub board_description: Option<String>,
}

/// Board response with its tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoardWithTasksDto {
    pub board_id: i32,
    pub board_name: Option<String>,
    pub board_description: Option<String>,

    /// Tasks owned by the board, possibly empty
    pub tasks: Vec<BoardTaskDto>,
}

/// Task entry nested in a board response (the owning board is implied)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoardTaskDto {
    pub task_id: i32,
    pub task_name: Option<String>,
    pub task_description: Option<String>,
    pub task_icon: Option<String>,
    pub task_status: Option<String>,
}

/// Create board request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBoardRequest {
    #[serde(default)]
    pub board_name: Option<String>,

    #[serde(default)]
    pub board_description: Option<String>,
}

/// Partial board update; absent fields are left unchanged, `null` clears
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBoardRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub board_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub board_description: Option<Option<String>>,
}

// ===== Task DTOs =====

/// Task response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    /// Task identifier
    #[schema(example = 42)]
    pub task_id: i32,

    pub task_name: Option<String>,
    pub task_description: Option<String>,

    /// Short icon code
    #[schema(example = "bug")]
    pub task_icon: Option<String>,

    /// Free-form status label
    #[schema(example = "in-progress")]
    pub task_status: Option<String>,

    /// Owning board
    pub board_id: i32,
}

/// Create task request; the board comes from the path
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub task_name: Option<String>,

    #[serde(default)]
    pub task_description: Option<String>,

    #[serde(default)]
    pub task_icon: Option<String>,

    #[serde(default)]
    pub task_status: Option<String>,
}

/// Partial task update; absent fields are left unchanged, `null` clears
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub task_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub task_description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub task_icon: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub task_status: Option<Option<String>>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// Note: Conversion implementations live in mapper.rs

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_distinguishes_absent_and_null() {
        let req: UpdateTaskRequest = serde_json::from_value(json!({
            "task_name": "Write docs",
            "task_icon": null
        }))
        .unwrap();

        assert_eq!(req.task_name, Some(Some("Write docs".to_string())));
        assert_eq!(req.task_icon, Some(None));
        assert_eq!(req.task_description, None);
        assert_eq!(req.task_status, None);
    }

    #[test]
    fn update_request_ignores_unknown_fields() {
        let req: UpdateBoardRequest = serde_json::from_value(json!({
            "board_id": 99,
            "board_description": "kept"
        }))
        .unwrap();

        assert_eq!(req.board_name, None);
        assert_eq!(req.board_description, Some(Some("kept".to_string())));
    }

    #[test]
    fn update_request_rejects_non_string_values() {
        let result: Result<UpdateBoardRequest, _> =
            serde_json::from_value(json!({ "board_name": 12 }));
        assert!(result.is_err());
    }

    #[test]
    fn create_request_accepts_empty_body() {
        let req: CreateTaskRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.task_name.is_none());
        assert!(req.task_status.is_none());
    }
}
