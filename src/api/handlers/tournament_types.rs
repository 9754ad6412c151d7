use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::AppError;
use crate::api::models::{TournamentTypeCreate, TournamentTypeResponse};
use crate::database;

use super::{AppState, AuthUser};

pub async fn create_tournament_type(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<TournamentTypeCreate>,
) -> Result<(StatusCode, Json<TournamentTypeResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Tournament type name must not be empty".to_string(),
        ));
    }

    let mut conn = database::get_connection(&state.pool)?;

    if database::tournament_types::find_by_name(&mut conn, &payload.name)?.is_some() {
        return Err(AppError::Conflict(format!(
            "Tournament type '{}' already exists",
            payload.name
        )));
    }

    let kind = database::tournament_types::insert_tournament_type(
        &mut conn,
        &payload.name,
        payload.description.as_deref(),
    )?;

    Ok((StatusCode::CREATED, Json(kind.into())))
}

pub async fn list_tournament_types(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<Json<Vec<TournamentTypeResponse>>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let kinds = database::tournament_types::list_all(&mut conn)?;
    Ok(Json(
        kinds.into_iter().map(TournamentTypeResponse::from).collect(),
    ))
}

pub async fn get_tournament_type(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<TournamentTypeResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let kind = database::tournament_types::find_by_id(&mut conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("Tournament type {id} not found")))?;

    Ok(Json(kind.into()))
}

pub async fn delete_tournament_type(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    if !database::tournament_types::delete_tournament_type(&mut conn, id)? {
        return Err(AppError::NotFound(format!(
            "Tournament type {id} not found"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
