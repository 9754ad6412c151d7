use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::AppError;
use crate::api::models::{
    EnrollmentCreate, EnrollmentResponse, ScheduleCreated, ScheduleMatch, ScheduleTour,
    StandingsRowResponse, TeamResponse, TournamentCreate, TournamentResponse, TournamentUpdate,
};
use crate::database::{self, models::TournamentChanges, DbConn};
use crate::schedule::{self, Tour};
use crate::standings::{self, MatchResult, StandingsRow};

use super::{current_manager, AppState, AuthUser};

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<TournamentCreate>,
) -> Result<(StatusCode, Json<TournamentResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Tournament name must not be empty".to_string(),
        ));
    }

    let mut conn = database::get_connection(&state.pool)?;

    if database::tournament_types::find_by_id(&mut conn, payload.tournament_type_id)?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown tournament type {}",
            payload.tournament_type_id
        )));
    }

    let manager = current_manager(&mut conn, &user)?;
    let tournament = database::tournaments::insert_tournament(
        &mut conn,
        manager.id,
        payload.tournament_type_id,
        &payload.name,
        payload.season.as_deref(),
        payload.region.as_deref(),
    )?;

    Ok((StatusCode::CREATED, Json(tournament.into())))
}

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<Json<Vec<TournamentResponse>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let tournaments = database::tournaments::list_all(&mut conn)?;
    Ok(Json(
        tournaments
            .into_iter()
            .map(TournamentResponse::from)
            .collect(),
    ))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<TournamentResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let tournament = database::tournaments::find_by_id(&mut conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("Tournament {id} not found")))?;

    Ok(Json(tournament.into()))
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<TournamentUpdate>,
) -> Result<Json<TournamentResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if let Some(type_id) = payload.tournament_type_id {
        if database::tournament_types::find_by_id(&mut conn, type_id)?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown tournament type {type_id}"
            )));
        }
    }

    let changes = TournamentChanges {
        name: payload.name,
        tournament_type_id: payload.tournament_type_id,
        season: payload.season,
        region: payload.region,
    };
    let tournament = database::tournaments::update_tournament(&mut conn, id, &changes)?
        .ok_or_else(|| AppError::NotFound(format!("Tournament {id} not found")))?;

    Ok(Json(tournament.into()))
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if !database::tournaments::delete_tournament(&mut conn, id)? {
        return Err(AppError::NotFound(format!("Tournament {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn enroll_team(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<EnrollmentCreate>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if database::tournaments::find_by_id(&mut conn, payload.tournament_id)?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown tournament {}",
            payload.tournament_id
        )));
    }
    if database::teams::find_by_id(&mut conn, payload.team_id)?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown team {}",
            payload.team_id
        )));
    }
    if database::tournament_teams::find_enrollment(
        &mut conn,
        payload.tournament_id,
        payload.team_id,
    )?
    .is_some()
    {
        return Err(AppError::Conflict(
            "Team is already enrolled in this tournament".to_string(),
        ));
    }

    let enrollment = database::tournament_teams::enroll_team(
        &mut conn,
        payload.tournament_id,
        payload.team_id,
    )?;

    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

pub async fn withdraw_team(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if !database::tournament_teams::withdraw_team(&mut conn, id)? {
        return Err(AppError::NotFound(format!("Enrollment {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_enrolled_teams(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if database::tournaments::find_by_id(&mut conn, id)?.is_none() {
        return Err(AppError::NotFound(format!("Tournament {id} not found")));
    }

    let teams = database::teams::list_by_tournament(&mut conn, id)?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Generates the double round-robin schedule for a tournament without
/// persisting anything. The enrollment order drives the pairing order.
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ScheduleTour>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let tours = generate_for_tournament(&mut conn, &state, id)?;
    Ok(Json(tours))
}

/// Generates the schedule and stores every fixture as an unplayed match.
pub async fn materialize_schedule(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<ScheduleCreated>), AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let teams = database::teams::list_by_tournament(&mut conn, id)?;
    if teams.is_empty() {
        return Err(AppError::NotFound(format!(
            "Tournament {id} does not exist or has no enrolled teams"
        )));
    }
    if database::matches::count_by_tournament(&mut conn, id)? > 0 {
        return Err(AppError::Conflict(
            "Tournament already has matches".to_string(),
        ));
    }

    let team_ids: Vec<i64> = teams.iter().map(|team| team.id).collect();
    let tours = schedule::generate_schedule(&team_ids, &state.config.schedule)?;

    let mut matches_created = 0;
    for tour in &tours {
        for fixture in &tour.fixtures {
            database::matches::insert_match(
                &mut conn,
                id,
                i64::from(tour.number),
                None,
                fixture.home,
                fixture.guest,
                None,
                None,
            )?;
            matches_created += 1;
        }
    }

    log::info!("Created {matches_created} matches for tournament {id}");
    Ok((
        StatusCode::CREATED,
        Json(ScheduleCreated {
            tournament_id: id,
            tours: tours.len(),
            matches_created,
        }),
    ))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<StandingsRowResponse>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if database::tournaments::find_by_id(&mut conn, id)?.is_none() {
        return Err(AppError::NotFound(format!("Tournament {id} not found")));
    }

    let rows = database::matches::list_by_tournament(&mut conn, id)?;
    let results: Vec<MatchResult<i64>> = rows
        .iter()
        .map(|row| MatchResult {
            home: row.home_team_id,
            guest: row.guest_team_id,
            home_score: row.home_score,
            guest_score: row.guest_score,
        })
        .collect();

    let table = standings::build_standings(&results);
    let response = standings_to_response(&mut conn, &table)?;
    Ok(Json(response))
}

fn generate_for_tournament(
    conn: &mut DbConn,
    state: &AppState,
    tournament_id: i64,
) -> Result<Vec<ScheduleTour>, AppError> {
    let teams = database::teams::list_by_tournament(conn, tournament_id)?;
    if teams.is_empty() {
        return Err(AppError::NotFound(format!(
            "Tournament {tournament_id} does not exist or has no enrolled teams"
        )));
    }

    let team_ids: Vec<i64> = teams.iter().map(|team| team.id).collect();
    let tours = schedule::generate_schedule(&team_ids, &state.config.schedule)?;

    let names: HashMap<i64, &str> = teams
        .iter()
        .map(|team| (team.id, team.name.as_str()))
        .collect();

    Ok(tours
        .iter()
        .map(|tour| tour_to_response(tour, &names))
        .collect())
}

fn tour_to_response(tour: &Tour<i64>, names: &HashMap<i64, &str>) -> ScheduleTour {
    let matches = tour
        .fixtures
        .iter()
        .map(|fixture| ScheduleMatch {
            home_team_id: fixture.home,
            home_team_name: team_name(names, fixture.home),
            guest_team_id: fixture.guest,
            guest_team_name: team_name(names, fixture.guest),
        })
        .collect();

    ScheduleTour {
        tour_number: tour.number,
        matches,
        idle_team_name: tour.idle.map(|team_id| team_name(names, team_id)),
    }
}

fn team_name(names: &HashMap<i64, &str>, team_id: i64) -> String {
    names
        .get(&team_id)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Team {team_id}"))
}

fn standings_to_response(
    conn: &mut DbConn,
    table: &[StandingsRow<i64>],
) -> Result<Vec<StandingsRowResponse>, AppError> {
    let mut response = Vec::with_capacity(table.len());
    for row in table {
        let team_name = database::teams::find_by_id(conn, row.team)?
            .map(|team| team.name)
            .unwrap_or_else(|| format!("Team {}", row.team));

        response.push(StandingsRowResponse {
            team_id: row.team,
            team_name,
            played: row.played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            points: row.points,
            goals_scored: row.goals_scored,
            goals_conceded: row.goals_conceded,
            goal_difference: row.goal_difference,
        });
    }

    Ok(response)
}
