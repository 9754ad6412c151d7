use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

/// Single-connection pool over a private in-memory database. The lone
/// connection keeps the database alive for the lifetime of the pool.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = apply_connection_init(SqliteConnectionManager::memory());
    r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create in-memory database pool")
}

pub fn default_database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "league_manager.db".to_string())
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    apply_connection_init(SqliteConnectionManager::file(path))
}

fn apply_connection_init(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    // SQLite leaves foreign key enforcement off unless every connection
    // turns it on.
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
