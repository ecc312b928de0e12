//! Integration tests for the boards domain service

mod common;

use boards_service::{BoardPatch, BoardsError, NewBoard, TaskPatch};
use common::{create_test_service, create_unreachable_service, new_board, new_task};

#[tokio::test]
async fn test_create_and_get_board() {
    let (service, store) = create_test_service();

    let created = service
        .create_board(new_board("Roadmap", "Q3 plans"))
        .await
        .expect("Failed to create board");
    assert_eq!(store.board_count(), 1);

    let retrieved = service
        .get_board(created.board_id)
        .await
        .expect("Failed to get board");
    assert_eq!(retrieved, created);
    assert_eq!(retrieved.board_name.as_deref(), Some("Roadmap"));
}

#[tokio::test]
async fn test_board_without_tasks_is_not_missing() {
    let (service, _store) = create_test_service();
    let board = service
        .create_board(NewBoard::default())
        .await
        .expect("Failed to create board");

    let with_tasks = service
        .get_board_with_tasks(board.board_id)
        .await
        .expect("Empty board must still be found");

    assert_eq!(with_tasks.board, board);
    assert!(with_tasks.tasks.is_empty());
}

#[tokio::test]
async fn test_get_missing_board() {
    let (service, _store) = create_test_service();

    let err = service.get_board_with_tasks(404).await.unwrap_err();
    assert_eq!(err, BoardsError::board_not_found(404));
    assert_eq!(err.to_string(), "Board not found");
}

#[tokio::test]
async fn test_board_lists_only_its_own_tasks() {
    let (service, _store) = create_test_service();
    let first = service.create_board(new_board("A", "first")).await.unwrap();
    let second = service.create_board(new_board("B", "second")).await.unwrap();

    let t1 = service
        .create_task(first.board_id, new_task("design", "todo"))
        .await
        .unwrap();
    service
        .create_task(second.board_id, new_task("deploy", "todo"))
        .await
        .unwrap();
    let t3 = service
        .create_task(first.board_id, new_task("review", "done"))
        .await
        .unwrap();

    let with_tasks = service.get_board_with_tasks(first.board_id).await.unwrap();
    assert_eq!(with_tasks.tasks, vec![t1, t3]);
    assert!(with_tasks
        .tasks
        .iter()
        .all(|t| t.board_id == first.board_id));
}

#[tokio::test]
async fn test_create_task_requires_existing_board() {
    let (service, store) = create_test_service();

    let err = service
        .create_task(12, new_task("orphan", "todo"))
        .await
        .unwrap_err();

    assert_eq!(err, BoardsError::board_not_found(12));
    assert_eq!(store.task_count(), 0);
}

#[tokio::test]
async fn test_update_board_changes_only_supplied_fields() {
    let (service, _store) = create_test_service();
    let board = service
        .create_board(new_board("Old name", "Keep me"))
        .await
        .unwrap();

    let updated = service
        .update_board(
            board.board_id,
            BoardPatch {
                board_name: Some(Some("X".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.board_name.as_deref(), Some("X"));
    assert_eq!(updated.board_description.as_deref(), Some("Keep me"));
}

#[tokio::test]
async fn test_update_missing_board() {
    let (service, _store) = create_test_service();

    let err = service
        .update_board(3, BoardPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err, BoardsError::board_not_found(3));
}

#[tokio::test]
async fn test_update_task_null_clears_field() {
    let (service, store) = create_test_service();
    let board = service.create_board(new_board("B", "d")).await.unwrap();
    let task = service
        .create_task(board.board_id, new_task("ship", "doing"))
        .await
        .unwrap();

    let updated = service
        .update_task(
            task.task_id,
            TaskPatch {
                task_status: Some(Some("done".to_string())),
                task_icon: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.task_status.as_deref(), Some("done"));
    assert_eq!(updated.task_icon, None);
    assert_eq!(updated.task_name, task.task_name);
    assert_eq!(store.stored_task(task.task_id), Some(updated));
}

#[tokio::test]
async fn test_delete_task_returns_prior_state() {
    let (service, _store) = create_test_service();
    let board = service.create_board(new_board("B", "d")).await.unwrap();
    let task = service
        .create_task(board.board_id, new_task("cleanup", "todo"))
        .await
        .unwrap();

    let deleted = service.delete_task(task.task_id).await.unwrap();
    assert_eq!(deleted, task);

    let err = service
        .update_task(task.task_id, TaskPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err, BoardsError::task_not_found(task.task_id));
    assert_eq!(err.to_string(), "Task not found");
}

#[tokio::test]
async fn test_delete_board_removes_its_tasks() {
    let (service, store) = create_test_service();
    let board = service.create_board(new_board("B", "d")).await.unwrap();
    let other = service.create_board(new_board("C", "e")).await.unwrap();
    service
        .create_task(board.board_id, new_task("one", "todo"))
        .await
        .unwrap();
    service
        .create_task(other.board_id, new_task("two", "todo"))
        .await
        .unwrap();

    let deleted = service.delete_board(board.board_id).await.unwrap();
    assert_eq!(deleted, board);
    assert_eq!(store.board_count(), 1);
    assert_eq!(store.task_count(), 1);

    let err = service.delete_board(board.board_id).await.unwrap_err();
    assert_eq!(err, BoardsError::board_not_found(board.board_id));
}

#[tokio::test]
async fn test_storage_failure_maps_to_internal() {
    let service = create_unreachable_service();

    let err = service.get_board_with_tasks(1).await.unwrap_err();
    match err {
        BoardsError::Internal { detail } => assert!(detail.contains("connection refused")),
        other => panic!("expected internal error, got {other:?}"),
    }

    assert!(matches!(
        service.create_task(1, new_task("x", "y")).await,
        Err(BoardsError::Internal { .. })
    ));
}
