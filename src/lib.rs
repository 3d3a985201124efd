pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod schema;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use application::account_service::AccountService;
pub use application::catalog_service::CatalogService;
pub use application::order_service::OrderService;
pub use config::Config;
pub use db::{create_pool, DbPool};
pub use errors::AppError;
pub use infrastructure::{MemoryStore, PgStore};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Migration(e.to_string()))?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}
