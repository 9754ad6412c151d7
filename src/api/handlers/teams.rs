use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::AppError;
use crate::api::models::{TeamCreate, TeamResponse, TeamUpdate};
use crate::database::{self, models::TeamChanges};

use super::{current_manager, AppState, AuthUser};

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.chars().count() < 2 {
        return Err(AppError::BadRequest(
            "Team name must be at least 2 characters long".to_string(),
        ));
    }
    Ok(())
}

fn validate_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();
    if !(2..=4).contains(&length) {
        return Err(AppError::BadRequest(
            "Team code must be between 2 and 4 characters long".to_string(),
        ));
    }
    Ok(())
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<TeamCreate>,
) -> Result<(StatusCode, Json<TeamResponse>), AppError> {
    validate_name(&payload.name)?;
    validate_code(&payload.code)?;

    let mut conn = database::get_connection(&state.pool)?;
    let manager = current_manager(&mut conn, &user)?;

    let team = database::teams::insert_team(
        &mut conn,
        manager.id,
        &payload.name,
        &payload.code,
        payload.country.as_deref(),
        payload.city.as_deref(),
        payload.achievements.as_deref(),
    )?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let teams = database::teams::list_all(&mut conn)?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let team = database::teams::find_by_id(&mut conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("Team {id} not found")))?;

    Ok(Json(team.into()))
}

pub async fn update_team(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<TeamUpdate>,
) -> Result<Json<TeamResponse>, AppError> {
    if let Some(name) = &payload.name {
        validate_name(name)?;
    }
    if let Some(code) = &payload.code {
        validate_code(code)?;
    }

    let mut conn = database::get_connection(&state.pool)?;

    let changes = TeamChanges {
        name: payload.name,
        code: payload.code,
        country: payload.country,
        city: payload.city,
        achievements: payload.achievements,
    };
    let team = database::teams::update_team(&mut conn, id, &changes)?
        .ok_or_else(|| AppError::NotFound(format!("Team {id} not found")))?;

    Ok(Json(team.into()))
}

pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if !database::teams::delete_team(&mut conn, id)? {
        return Err(AppError::NotFound(format!("Team {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
