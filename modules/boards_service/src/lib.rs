//! Boards Service Module
//!
//! CRUD backend for boards and the tasks that belong to them, stored in a
//! relational database through SeaORM and exposed as a JSON REST API.

// Public exports
pub mod contract;
pub use contract::{
    Board, BoardPatch, BoardWithTasks, BoardsError, NewBoard, NewTask, Task, TaskPatch,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::BoardsServiceModule;

pub mod api;
pub use api::rest::ErrorDetail;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
