//! Table bootstrap derived from the entity definitions
//!
//! Creates missing tables on startup. There is no versioning: column changes
//! to existing tables have to be applied out of band.

use super::entity::{board, task};
use anyhow::{Context, Result};
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

/// Create `boards` and `tasks` (and the `tasks.board_id` index) if absent
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let boards = schema
        .create_table_from_entity(board::Entity)
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&boards))
        .await
        .context("creating boards table")?;

    // Declares the boards foreign key, so it must follow the boards table
    let tasks = schema
        .create_table_from_entity(task::Entity)
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&tasks))
        .await
        .context("creating tasks table")?;

    let board_index = Index::create()
        .if_not_exists()
        .name("idx_tasks_board_id")
        .table(task::Entity)
        .col(task::Column::BoardId)
        .to_owned();
    db.execute(backend.build(&board_index))
        .await
        .context("creating tasks.board_id index")?;

    tracing::debug!(?backend, "boards schema ready");
    Ok(())
}
