use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Match, MatchWithTeams};

#[allow(clippy::too_many_arguments)]
pub fn insert_match(
    conn: &mut DbConn,
    tournament_id: i64,
    tour_number: i64,
    date: Option<NaiveDateTime>,
    home_team_id: i64,
    guest_team_id: i64,
    home_score: Option<i64>,
    guest_score: Option<i64>,
) -> Result<Match> {
    let sql = "INSERT INTO matches (tournament_id, tour_number, date, home_team_id, guest_team_id, home_score, guest_score) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id, tournament_id, tour_number, date, home_team_id, guest_team_id, home_score, guest_score, created_at";

    conn.query_row(
        sql,
        params![
            tournament_id,
            tour_number,
            date,
            home_team_id,
            guest_team_id,
            home_score,
            guest_score
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Match>> {
    let sql = "SELECT id, tournament_id, tour_number, date, home_team_id, guest_team_id, home_score, guest_score, created_at FROM matches WHERE id = ?1";

    conn.query_row(sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn list_by_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<Match>> {
    let sql = "SELECT id, tournament_id, tour_number, date, home_team_id, guest_team_id, home_score, guest_score, created_at FROM matches WHERE tournament_id = ?1 ORDER BY tour_number, id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all_with_teams(conn: &mut DbConn) -> Result<Vec<MatchWithTeams>> {
    let sql = "
        SELECT m.id, m.tournament_id, m.tour_number, m.date, m.home_team_id, h.name, m.guest_team_id, g.name, m.home_score, m.guest_score
        FROM matches m
        JOIN teams h ON m.home_team_id = h.id
        JOIN teams g ON m.guest_team_id = g.id
        ORDER BY m.tournament_id, m.tour_number, m.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_with_teams_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_by_tournament_with_teams(
    conn: &mut DbConn,
    tournament_id: i64,
) -> Result<Vec<MatchWithTeams>> {
    let sql = "
        SELECT m.id, m.tournament_id, m.tour_number, m.date, m.home_team_id, h.name, m.guest_team_id, g.name, m.home_score, m.guest_score
        FROM matches m
        JOIN teams h ON m.home_team_id = h.id
        JOIN teams g ON m.guest_team_id = g.id
        WHERE m.tournament_id = ?1
        ORDER BY m.tour_number, m.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_with_teams_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_by_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM matches WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to count matches for tournament")
}

/// Records or clears a match result. The scores are written as given
/// while a missing date leaves the stored one untouched.
pub fn update_result(
    conn: &mut DbConn,
    id: i64,
    home_score: Option<i64>,
    guest_score: Option<i64>,
    date: Option<NaiveDateTime>,
) -> Result<Option<Match>> {
    let sql = "UPDATE matches SET home_score = ?2, guest_score = ?3, date = COALESCE(?4, date) WHERE id = ?1 RETURNING id, tournament_id, tour_number, date, home_team_id, guest_team_id, home_score, guest_score, created_at";

    conn.query_row(sql, params![id, home_score, guest_score, date], parse_match_row)
        .optional()
        .context("Failed to update match result")
}

pub fn delete_match(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM matches WHERE id = ?1", params![id])
        .context("Failed to delete match")?;

    Ok(deleted > 0)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        tour_number: row.get(2)?,
        date: row.get(3)?,
        home_team_id: row.get(4)?,
        guest_team_id: row.get(5)?,
        home_score: row.get(6)?,
        guest_score: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn parse_match_with_teams_row(row: &rusqlite::Row) -> rusqlite::Result<MatchWithTeams> {
    Ok(MatchWithTeams {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        tour_number: row.get(2)?,
        date: row.get(3)?,
        home_team_id: row.get(4)?,
        home_team_name: row.get(5)?,
        guest_team_id: row.get(6)?,
        guest_team_name: row.get(7)?,
        home_score: row.get(8)?,
        guest_score: row.get(9)?,
    })
}
