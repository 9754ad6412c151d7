use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{auth, matches, teams, tournament_types, tournaments, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/register", post(auth::register))
        .route("/api/token", post(auth::login))
        .route("/api/users/me", get(auth::me))
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route(
            "/api/tournament_types",
            get(tournament_types::list_tournament_types)
                .post(tournament_types::create_tournament_type),
        )
        .route(
            "/api/tournament_types/:id",
            get(tournament_types::get_tournament_type)
                .delete(tournament_types::delete_tournament_type),
        )
        .route(
            "/api/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/api/tournaments/:id",
            get(tournaments::get_tournament)
                .put(tournaments::update_tournament)
                .delete(tournaments::delete_tournament),
        )
        .route("/api/tournaments/:id/teams", get(tournaments::list_enrolled_teams))
        .route(
            "/api/tournaments/:id/schedule",
            get(tournaments::get_schedule).post(tournaments::materialize_schedule),
        )
        .route("/api/tournaments/:id/standings", get(tournaments::get_standings))
        .route("/api/tournament_teams", post(tournaments::enroll_team))
        .route("/api/tournament_teams/:id", delete(tournaments::withdraw_team))
        .route(
            "/api/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/:id",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
