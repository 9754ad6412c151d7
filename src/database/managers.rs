use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Manager;

pub fn insert_manager(
    conn: &mut DbConn,
    user_id: i64,
    first_name: &str,
    last_name: &str,
    birthdate: Option<NaiveDateTime>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Manager> {
    let sql = "INSERT INTO managers (user_id, first_name, last_name, birthdate, email, phone) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, user_id, first_name, last_name, birthdate, email, phone, joined_at";

    conn.query_row(
        sql,
        params![user_id, first_name, last_name, birthdate, email, phone],
        parse_manager_row,
    )
    .context("Failed to insert new manager")
}

pub fn find_by_user_id(conn: &mut DbConn, user_id: i64) -> Result<Option<Manager>> {
    let sql = "SELECT id, user_id, first_name, last_name, birthdate, email, phone, joined_at FROM managers WHERE user_id = ?1";

    conn.query_row(sql, params![user_id], parse_manager_row)
        .optional()
        .context("Failed to query manager by user id")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Manager>> {
    let sql = "SELECT id, user_id, first_name, last_name, birthdate, email, phone, joined_at FROM managers WHERE id = ?1";

    conn.query_row(sql, params![id], parse_manager_row)
        .optional()
        .context("Failed to query manager by id")
}

fn parse_manager_row(row: &rusqlite::Row) -> rusqlite::Result<Manager> {
    Ok(Manager {
        id: row.get(0)?,
        user_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        birthdate: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        joined_at: row.get(7)?,
    })
}
