use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::TournamentType;

pub fn insert_tournament_type(
    conn: &mut DbConn,
    name: &str,
    description: Option<&str>,
) -> Result<TournamentType> {
    let sql = "INSERT INTO tournament_types (name, description) VALUES (?1, ?2) RETURNING id, name, description";

    conn.query_row(sql, params![name, description], parse_tournament_type_row)
        .context("Failed to insert new tournament type")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<TournamentType>> {
    let sql = "SELECT id, name, description FROM tournament_types WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_type_row)
        .optional()
        .context("Failed to query tournament type by id")
}

pub fn find_by_name(conn: &mut DbConn, name: &str) -> Result<Option<TournamentType>> {
    let sql = "SELECT id, name, description FROM tournament_types WHERE name = ?1";

    conn.query_row(sql, params![name], parse_tournament_type_row)
        .optional()
        .context("Failed to query tournament type by name")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<TournamentType>> {
    let sql = "SELECT id, name, description FROM tournament_types ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_type_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_tournament_type(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM tournament_types WHERE id = ?1", params![id])
        .context("Failed to delete tournament type")?;

    Ok(deleted > 0)
}

fn parse_tournament_type_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentType> {
    Ok(TournamentType {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}
