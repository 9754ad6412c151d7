use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::User;

pub fn insert_user(conn: &mut DbConn, username: &str, password_hash: &str) -> Result<User> {
    let sql = "INSERT INTO users (username, password_hash) VALUES (?1, ?2) RETURNING id, username, password_hash, is_active, created_at";

    conn.query_row(sql, params![username, password_hash], parse_user_row)
        .context("Failed to insert new user")
}

pub fn find_by_username(conn: &mut DbConn, username: &str) -> Result<Option<User>> {
    let sql = "SELECT id, username, password_hash, is_active, created_at FROM users WHERE username = ?1";

    conn.query_row(sql, params![username], parse_user_row)
        .optional()
        .context("Failed to query user by username")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<User>> {
    let sql = "SELECT id, username, password_hash, is_active, created_at FROM users WHERE id = ?1";

    conn.query_row(sql, params![id], parse_user_row)
        .optional()
        .context("Failed to query user by id")
}

pub fn set_active(conn: &mut DbConn, id: i64, is_active: bool) -> Result<Option<User>> {
    let sql = "UPDATE users SET is_active = ?2 WHERE id = ?1 RETURNING id, username, password_hash, is_active, created_at";

    conn.query_row(sql, params![id, is_active], parse_user_row)
        .optional()
        .context("Failed to update user active flag")
}

fn parse_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        is_active: row.get(3)?,
        created_at: row.get(4)?,
    })
}
