//! Route registration with OpenAPI documentation

use super::error::{map_domain_error, ApiError, ErrorBody, ErrorDetail};
use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document for the boards API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_board_handler,
        create_board_handler,
        update_board_handler,
        delete_board_handler,
        create_task_handler,
        update_task_handler,
        delete_task_handler,
    ),
    components(schemas(
        BoardDto,
        BoardWithTasksDto,
        BoardTaskDto,
        CreateBoardRequest,
        UpdateBoardRequest,
        TaskDto,
        CreateTaskRequest,
        UpdateTaskRequest,
        ErrorBody,
    )),
    tags(
        (name = "boards", description = "Boards and their tasks"),
        (name = "tasks", description = "Individual tasks")
    )
)]
pub struct ApiDoc;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>, errors: ErrorDetail) -> Router {
    router
        // Board endpoints
        .route("/api/boards", post(create_board_handler))
        .route(
            "/api/boards/{board_id}",
            get(get_board_handler)
                .put(update_board_handler)
                .delete(delete_board_handler)
                .post(create_task_handler),
        )
        // Task endpoints
        .route(
            "/api/tasks/{task_id}",
            put(update_task_handler).delete(delete_task_handler),
        )
        .route("/api/openapi.json", get(openapi_handler))
        // Add service and error mode as extensions for handlers
        .layer(Extension(service))
        .layer(Extension(errors))
}

// ===== Handler wrappers that extract service from Extension =====

#[utoipa::path(
    get,
    path = "/api/boards/{board_id}",
    tag = "boards",
    params(("board_id" = i32, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Board with its tasks", body = BoardWithTasksDto),
        (status = 404, description = "Board not found", body = ErrorBody)
    )
)]
async fn get_board_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
) -> Result<Json<BoardWithTasksDto>, ApiError> {
    handlers::get_board(service, path)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    post,
    path = "/api/boards",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses((status = 201, description = "Board created", body = BoardDto))
)]
async fn create_board_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    json: Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardDto>), ApiError> {
    handlers::create_board(service, json)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    put,
    path = "/api/boards/{board_id}",
    tag = "boards",
    params(("board_id" = i32, Path, description = "Board identifier")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Updated board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorBody)
    )
)]
async fn update_board_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
    json: Json<UpdateBoardRequest>,
) -> Result<Json<BoardDto>, ApiError> {
    handlers::update_board(service, path, json)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    delete,
    path = "/api/boards/{board_id}",
    tag = "boards",
    params(("board_id" = i32, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Deleted board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorBody)
    )
)]
async fn delete_board_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
) -> Result<Json<BoardDto>, ApiError> {
    handlers::delete_board(service, path)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    post,
    path = "/api/boards/{board_id}",
    tag = "tasks",
    params(("board_id" = i32, Path, description = "Owning board identifier")),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 404, description = "Board not found", body = ErrorBody)
    )
)]
async fn create_task_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
    json: Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskDto>), ApiError> {
    handlers::create_task(service, path, json)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = "tasks",
    params(("task_id" = i32, Path, description = "Task identifier")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorBody)
    )
)]
async fn update_task_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
    json: Json<UpdateTaskRequest>,
) -> Result<Json<TaskDto>, ApiError> {
    handlers::update_task(service, path, json)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = "tasks",
    params(("task_id" = i32, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Deleted task", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorBody)
    )
)]
async fn delete_task_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(errors): Extension<ErrorDetail>,
    path: Path<i32>,
) -> Result<Json<TaskDto>, ApiError> {
    handlers::delete_task(service, path)
        .await
        .map_err(|e| map_domain_error(e, errors))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
