//! Module assembly: database handle, repositories, service and router

use crate::api::rest::{register_routes, ErrorDetail};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{ensure_schema, SeaOrmBoardRepository, SeaOrmTaskRepository};
use anyhow::{Context, Result};
use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Boards service module
pub struct BoardsServiceModule {
    service: Arc<Service>,
}

impl BoardsServiceModule {
    /// Connect to `DATABASE_URL` and build the module on top of it
    pub async fn init(config: &Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database_url()?);
        options
            .max_connections(config.max_connections)
            .sqlx_logging(config.sql_logging);

        let db = Database::connect(options)
            .await
            .context("connecting to database")?;

        Self::from_connection(db).await
    }

    /// Build the module on an already opened connection pool
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        ensure_schema(&db).await?;

        let conn = Arc::new(db);

        // Build repositories
        let board_repo = Arc::new(SeaOrmBoardRepository::new(conn.clone()));
        let task_repo = Arc::new(SeaOrmTaskRepository::new(conn));

        let service = Arc::new(Service::new(board_repo, task_repo));

        tracing::info!("Boards service initialized");
        Ok(Self { service })
    }

    /// REST router with request tracing
    pub fn router(&self, errors: ErrorDetail) -> Router {
        tracing::info!("Registering boards service REST routes");
        register_routes(Router::new(), self.service.clone(), errors)
            .layer(TraceLayer::new_for_http())
    }
}
