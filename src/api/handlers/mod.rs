use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::api::error::AppError;
use crate::auth::AuthError;
use crate::config::settings::AppConfig;
use crate::database::{self, models::Manager, DbConn, DbPool};

pub mod auth;
pub mod matches;
pub mod teams;
pub mod tournament_types;
pub mod tournaments;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

/// The authenticated, active user behind the request. Extracting this
/// from a handler is what puts the endpoint behind authentication.
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized("Authorization header is not a bearer token".to_string())
        })?;

        let claims = crate::auth::decode_access_token(token, &state.config.auth)?;

        let mut conn = database::get_connection(&state.pool)?;
        let user = database::users::find_by_username(&mut conn, &claims.sub)?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

        if !user.is_active {
            return Err(AuthError::InactiveUser.into());
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }
}

/// Manager profile of the authenticated user. Registration always creates
/// one, so a missing profile is a data integrity problem.
pub fn current_manager(conn: &mut DbConn, user: &AuthUser) -> Result<Manager, AppError> {
    database::managers::find_by_user_id(conn, user.user_id)?.ok_or_else(|| {
        AppError::Internal(format!("User {} has no manager profile", user.username))
    })
}
