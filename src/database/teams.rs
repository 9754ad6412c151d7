use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Team, TeamChanges};

pub fn insert_team(
    conn: &mut DbConn,
    manager_id: i64,
    name: &str,
    code: &str,
    country: Option<&str>,
    city: Option<&str>,
    achievements: Option<&str>,
) -> Result<Team> {
    let sql = "INSERT INTO teams (manager_id, name, code, country, city, achievements) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, manager_id, name, code, country, city, achievements, created_at";

    conn.query_row(
        sql,
        params![manager_id, name, code, country, city, achievements],
        parse_team_row,
    )
    .context("Failed to insert new team")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Team>> {
    let sql = "SELECT id, manager_id, name, code, country, city, achievements, created_at FROM teams WHERE id = ?1";

    conn.query_row(sql, params![id], parse_team_row)
        .optional()
        .context("Failed to query team by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Team>> {
    let sql = "SELECT id, manager_id, name, code, country, city, achievements, created_at FROM teams ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Teams enrolled in a tournament, in enrollment order. That order is
/// what the schedule generator receives as its input.
pub fn list_by_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<Team>> {
    let sql = "
        SELECT t.id, t.manager_id, t.name, t.code, t.country, t.city, t.achievements, t.created_at
        FROM teams t
        JOIN tournament_teams tt ON tt.team_id = t.id
        WHERE tt.tournament_id = ?1
        ORDER BY tt.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_team(conn: &mut DbConn, id: i64, changes: &TeamChanges) -> Result<Option<Team>> {
    let sql = "UPDATE teams SET name = COALESCE(?2, name), code = COALESCE(?3, code), country = COALESCE(?4, country), city = COALESCE(?5, city), achievements = COALESCE(?6, achievements) WHERE id = ?1 RETURNING id, manager_id, name, code, country, city, achievements, created_at";

    conn.query_row(
        sql,
        params![
            id,
            changes.name,
            changes.code,
            changes.country,
            changes.city,
            changes.achievements
        ],
        parse_team_row,
    )
    .optional()
    .context("Failed to update team")
}

pub fn delete_team(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM teams WHERE id = ?1", params![id])
        .context("Failed to delete team")?;

    Ok(deleted > 0)
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        manager_id: row.get(1)?,
        name: row.get(2)?,
        code: row.get(3)?,
        country: row.get(4)?,
        city: row.get(5)?,
        achievements: row.get(6)?,
        created_at: row.get(7)?,
    })
}
