//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{BoardRepository, TaskRepository};
pub use service::Service;
