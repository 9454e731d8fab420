use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single connection keeps the `:memory:` database alive and shared for
/// the whole test.
pub async fn migrated_sqlite() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory SQLite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}
