use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Tournament, TournamentChanges};

pub fn insert_tournament(
    conn: &mut DbConn,
    manager_id: i64,
    tournament_type_id: i64,
    name: &str,
    season: Option<&str>,
    region: Option<&str>,
) -> Result<Tournament> {
    let sql = "INSERT INTO tournaments (manager_id, tournament_type_id, name, season, region) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, manager_id, tournament_type_id, name, season, region, created_at";

    conn.query_row(
        sql,
        params![manager_id, tournament_type_id, name, season, region],
        parse_tournament_row,
    )
    .context("Failed to insert new tournament")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Tournament>> {
    let sql = "SELECT id, manager_id, tournament_type_id, name, season, region, created_at FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = "SELECT id, manager_id, tournament_type_id, name, season, region, created_at FROM tournaments ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_tournament(
    conn: &mut DbConn,
    id: i64,
    changes: &TournamentChanges,
) -> Result<Option<Tournament>> {
    let sql = "UPDATE tournaments SET name = COALESCE(?2, name), tournament_type_id = COALESCE(?3, tournament_type_id), season = COALESCE(?4, season), region = COALESCE(?5, region) WHERE id = ?1 RETURNING id, manager_id, tournament_type_id, name, season, region, created_at";

    conn.query_row(
        sql,
        params![
            id,
            changes.name,
            changes.tournament_type_id,
            changes.season,
            changes.region
        ],
        parse_tournament_row,
    )
    .optional()
    .context("Failed to update tournament")
}

pub fn delete_tournament(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM tournaments WHERE id = ?1", params![id])
        .context("Failed to delete tournament")?;

    Ok(deleted > 0)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        manager_id: row.get(1)?,
        tournament_type_id: row.get(2)?,
        name: row.get(3)?,
        season: row.get(4)?,
        region: row.get(5)?,
        created_at: row.get(6)?,
    })
}
