use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::TournamentTeam;

pub fn enroll_team(conn: &mut DbConn, tournament_id: i64, team_id: i64) -> Result<TournamentTeam> {
    let sql = "INSERT INTO tournament_teams (tournament_id, team_id) VALUES (?1, ?2) RETURNING id, tournament_id, team_id";

    conn.query_row(sql, params![tournament_id, team_id], parse_enrollment_row)
        .context("Failed to enroll team in tournament")
}

pub fn find_enrollment(
    conn: &mut DbConn,
    tournament_id: i64,
    team_id: i64,
) -> Result<Option<TournamentTeam>> {
    let sql = "SELECT id, tournament_id, team_id FROM tournament_teams WHERE tournament_id = ?1 AND team_id = ?2";

    conn.query_row(sql, params![tournament_id, team_id], parse_enrollment_row)
        .optional()
        .context("Failed to query enrollment")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<TournamentTeam>> {
    let sql = "SELECT id, tournament_id, team_id FROM tournament_teams WHERE id = ?1";

    conn.query_row(sql, params![id], parse_enrollment_row)
        .optional()
        .context("Failed to query enrollment by id")
}

pub fn list_by_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<TournamentTeam>> {
    let sql = "SELECT id, tournament_id, team_id FROM tournament_teams WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_enrollment_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn withdraw_team(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM tournament_teams WHERE id = ?1", params![id])
        .context("Failed to withdraw team from tournament")?;

    Ok(deleted > 0)
}

fn parse_enrollment_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentTeam> {
    Ok(TournamentTeam {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        team_id: row.get(2)?,
    })
}
