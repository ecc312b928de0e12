//! Shared fixtures: in-memory repositories and an SQLite-backed module

#![allow(dead_code)]

use async_trait::async_trait;
use boards_service::domain::repository::{BoardRepository, TaskRepository};
use boards_service::domain::Service;
use boards_service::{
    Board, BoardPatch, BoardWithTasks, BoardsServiceModule, NewBoard, NewTask, Task, TaskPatch,
};
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database};
use std::collections::BTreeMap;
use std::sync::Arc;

// ===== In-memory store =====

#[derive(Default)]
struct State {
    boards: BTreeMap<i32, Board>,
    tasks: BTreeMap<i32, Task>,
    last_board_id: i32,
    last_task_id: i32,
}

/// Both repositories over one shared map, with cascade on board delete
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_count(&self) -> usize {
        self.state.read().boards.len()
    }

    pub fn task_count(&self) -> usize {
        self.state.read().tasks.len()
    }

    pub fn stored_task(&self, task_id: i32) -> Option<Task> {
        self.state.read().tasks.get(&task_id).cloned()
    }
}

#[async_trait]
impl BoardRepository for InMemoryStore {
    async fn find_by_id(&self, board_id: i32) -> anyhow::Result<Option<Board>> {
        Ok(self.state.read().boards.get(&board_id).cloned())
    }

    async fn find_with_tasks(&self, board_id: i32) -> anyhow::Result<Option<BoardWithTasks>> {
        let state = self.state.read();
        Ok(state.boards.get(&board_id).map(|board| BoardWithTasks {
            board: board.clone(),
            tasks: state
                .tasks
                .values()
                .filter(|t| t.board_id == board_id)
                .cloned()
                .collect(),
        }))
    }

    async fn create(&self, board: &NewBoard) -> anyhow::Result<Board> {
        let mut state = self.state.write();
        state.last_board_id += 1;
        let created = Board {
            board_id: state.last_board_id,
            board_name: board.board_name.clone(),
            board_description: board.board_description.clone(),
        };
        state.boards.insert(created.board_id, created.clone());
        Ok(created)
    }

    async fn update(&self, board_id: i32, patch: &BoardPatch) -> anyhow::Result<Option<Board>> {
        let mut state = self.state.write();
        Ok(state.boards.get_mut(&board_id).map(|board| {
            patch.apply_to(board);
            board.clone()
        }))
    }

    async fn delete(&self, board_id: i32) -> anyhow::Result<Option<Board>> {
        let mut state = self.state.write();
        let removed = state.boards.remove(&board_id);
        if removed.is_some() {
            state.tasks.retain(|_, t| t.board_id != board_id);
        }
        Ok(removed)
    }

    async fn exists(&self, board_id: i32) -> anyhow::Result<bool> {
        Ok(self.state.read().boards.contains_key(&board_id))
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn find_by_id(&self, task_id: i32) -> anyhow::Result<Option<Task>> {
        Ok(self.state.read().tasks.get(&task_id).cloned())
    }

    async fn create(&self, board_id: i32, task: &NewTask) -> anyhow::Result<Task> {
        let mut state = self.state.write();
        state.last_task_id += 1;
        let created = Task {
            task_id: state.last_task_id,
            task_name: task.task_name.clone(),
            task_description: task.task_description.clone(),
            task_icon: task.task_icon.clone(),
            task_status: task.task_status.clone(),
            board_id,
        };
        state.tasks.insert(created.task_id, created.clone());
        Ok(created)
    }

    async fn update(&self, task_id: i32, patch: &TaskPatch) -> anyhow::Result<Option<Task>> {
        let mut state = self.state.write();
        Ok(state.tasks.get_mut(&task_id).map(|task| {
            patch.apply_to(task);
            task.clone()
        }))
    }

    async fn delete(&self, task_id: i32) -> anyhow::Result<Option<Task>> {
        Ok(self.state.write().tasks.remove(&task_id))
    }
}

// ===== Failing store =====

/// Every call fails as if the database were unreachable
pub struct UnreachableStore;

fn unreachable_db<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl BoardRepository for UnreachableStore {
    async fn find_by_id(&self, _board_id: i32) -> anyhow::Result<Option<Board>> {
        unreachable_db()
    }

    async fn find_with_tasks(&self, _board_id: i32) -> anyhow::Result<Option<BoardWithTasks>> {
        unreachable_db()
    }

    async fn create(&self, _board: &NewBoard) -> anyhow::Result<Board> {
        unreachable_db()
    }

    async fn update(&self, _board_id: i32, _patch: &BoardPatch) -> anyhow::Result<Option<Board>> {
        unreachable_db()
    }

    async fn delete(&self, _board_id: i32) -> anyhow::Result<Option<Board>> {
        unreachable_db()
    }

    async fn exists(&self, _board_id: i32) -> anyhow::Result<bool> {
        unreachable_db()
    }
}

#[async_trait]
impl TaskRepository for UnreachableStore {
    async fn find_by_id(&self, _task_id: i32) -> anyhow::Result<Option<Task>> {
        unreachable_db()
    }

    async fn create(&self, _board_id: i32, _task: &NewTask) -> anyhow::Result<Task> {
        unreachable_db()
    }

    async fn update(&self, _task_id: i32, _patch: &TaskPatch) -> anyhow::Result<Option<Task>> {
        unreachable_db()
    }

    async fn delete(&self, _task_id: i32) -> anyhow::Result<Option<Task>> {
        unreachable_db()
    }
}

// ===== Builders =====

pub fn create_test_service() -> (Service, InMemoryStore) {
    let store = InMemoryStore::new();
    let service = Service::new(Arc::new(store.clone()), Arc::new(store.clone()));
    (service, store)
}

pub fn create_unreachable_service() -> Service {
    Service::new(Arc::new(UnreachableStore), Arc::new(UnreachableStore))
}

/// Module over a private in-memory SQLite database
pub async fn sqlite_module() -> BoardsServiceModule {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A second pooled connection would open a second, empty database
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");

    BoardsServiceModule::from_connection(db)
        .await
        .expect("Failed to build boards module")
}

pub fn new_board(name: &str, description: &str) -> NewBoard {
    NewBoard {
        board_name: Some(name.to_string()),
        board_description: Some(description.to_string()),
    }
}

pub fn new_task(name: &str, status: &str) -> NewTask {
    NewTask {
        task_name: Some(name.to_string()),
        task_description: Some(format!("{name} description")),
        task_icon: Some("star".to_string()),
        task_status: Some(status.to_string()),
    }
}
