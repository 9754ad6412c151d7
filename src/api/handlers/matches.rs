use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::error::AppError;
use crate::api::models::{MatchCreate, MatchListItem, MatchResponse, MatchUpdate};
use crate::database;

use super::{AppState, AuthUser};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParams {
    pub tournament_id: Option<i64>,
}

fn validate_scores(home_score: Option<i64>, guest_score: Option<i64>) -> Result<(), AppError> {
    if home_score.is_some() != guest_score.is_some() {
        return Err(AppError::BadRequest(
            "Both scores must be provided together".to_string(),
        ));
    }
    if home_score.is_some_and(|score| score < 0) || guest_score.is_some_and(|score| score < 0) {
        return Err(AppError::BadRequest("Scores must not be negative".to_string()));
    }
    Ok(())
}

pub async fn create_match(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<MatchCreate>,
) -> Result<(StatusCode, Json<MatchResponse>), AppError> {
    if payload.home_team_id == payload.guest_team_id {
        return Err(AppError::BadRequest(
            "A team cannot play against itself".to_string(),
        ));
    }
    if payload.tour_number < 1 {
        return Err(AppError::BadRequest(
            "Tour number must be positive".to_string(),
        ));
    }
    validate_scores(payload.home_score, payload.guest_score)?;

    let mut conn = database::get_connection(&state.pool)?;

    if database::tournaments::find_by_id(&mut conn, payload.tournament_id)?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown tournament {}",
            payload.tournament_id
        )));
    }
    for team_id in [payload.home_team_id, payload.guest_team_id] {
        if database::teams::find_by_id(&mut conn, team_id)?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown team {team_id}")));
        }
    }

    let row = database::matches::insert_match(
        &mut conn,
        payload.tournament_id,
        payload.tour_number,
        payload.date,
        payload.home_team_id,
        payload.guest_team_id,
        payload.home_score,
        payload.guest_score,
    )?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<MatchListItem>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let rows = match params.tournament_id {
        Some(tournament_id) => {
            database::matches::list_by_tournament_with_teams(&mut conn, tournament_id)?
        }
        None => database::matches::list_all_with_teams(&mut conn)?,
    };

    Ok(Json(rows.into_iter().map(MatchListItem::from).collect()))
}

pub async fn get_match(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MatchResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let row = database::matches::find_by_id(&mut conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("Match {id} not found")))?;

    Ok(Json(row.into()))
}

pub async fn update_match(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<MatchUpdate>,
) -> Result<Json<MatchResponse>, AppError> {
    validate_scores(payload.home_score, payload.guest_score)?;

    let mut conn = database::get_connection(&state.pool)?;

    let row = database::matches::update_result(
        &mut conn,
        id,
        payload.home_score,
        payload.guest_score,
        payload.date,
    )?
    .ok_or_else(|| AppError::NotFound(format!("Match {id} not found")))?;

    Ok(Json(row.into()))
}

pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if !database::matches::delete_match(&mut conn, id)? {
        return Err(AppError::NotFound(format!("Match {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
