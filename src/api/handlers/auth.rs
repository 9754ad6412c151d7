use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::api::error::AppError;
use crate::api::models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::auth::{create_access_token, hash_password, verify_password, AuthError};
use crate::database;

use super::{AppState, AuthUser};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if payload.username.chars().count() < 3 {
        return Err(AppError::BadRequest(
            "Username must be at least 3 characters long".to_string(),
        ));
    }
    if payload.password.chars().count() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    let mut conn = database::get_connection(&state.pool)?;

    if database::users::find_by_username(&mut conn, &payload.username)?.is_some() {
        return Err(AppError::Conflict("Username already registered".to_string()));
    }

    let password_hash = hash_password(&payload.password, state.config.auth.bcrypt_cost)?;
    let user = database::users::insert_user(&mut conn, &payload.username, &password_hash)?;
    database::managers::insert_manager(
        &mut conn,
        user.id,
        &payload.first_name,
        &payload.last_name,
        payload.birthdate,
        payload.email.as_deref(),
        payload.phone.as_deref(),
    )?;

    log::info!("Registered new user {}", user.username);
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let user = database::users::find_by_username(&mut conn, &payload.username)?
        .ok_or(AuthError::InvalidCredentials)?;
    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    let access_token = create_access_token(&user.username, &state.config.auth)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;

    let row = database::users::find_by_id(&mut conn, user.user_id)?
        .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

    Ok(Json(row.into()))
}
