use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::models::{
    Match, MatchWithTeams, Team, Tournament, TournamentTeam, TournamentType, User,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDateTime>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// OAuth2-style token payload; field names stay snake_case on purpose.
#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreate {
    pub name: String,
    pub code: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub code: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub achievements: Option<String>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            manager_id: team.manager_id,
            name: team.name,
            code: team.code,
            country: team.country,
            city: team.city,
            achievements: team.achievements,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentTypeCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentTypeResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<TournamentType> for TournamentTypeResponse {
    fn from(kind: TournamentType) -> Self {
        Self {
            id: kind.id,
            name: kind.name,
            description: kind.description,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCreate {
    pub name: String,
    pub tournament_type_id: i64,
    pub season: Option<String>,
    pub region: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub tournament_type_id: Option<i64>,
    pub season: Option<String>,
    pub region: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: i64,
    pub manager_id: i64,
    pub tournament_type_id: i64,
    pub name: String,
    pub season: Option<String>,
    pub region: Option<String>,
}

impl From<Tournament> for TournamentResponse {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: tournament.id,
            manager_id: tournament.manager_id,
            tournament_type_id: tournament.tournament_type_id,
            name: tournament.name,
            season: tournament.season,
            region: tournament.region,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreate {
    pub tournament_id: i64,
    pub team_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub team_id: i64,
}

impl From<TournamentTeam> for EnrollmentResponse {
    fn from(enrollment: TournamentTeam) -> Self {
        Self {
            id: enrollment.id,
            tournament_id: enrollment.tournament_id,
            team_id: enrollment.team_id,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCreate {
    pub tournament_id: i64,
    pub tour_number: i64,
    pub date: Option<NaiveDateTime>,
    pub home_team_id: i64,
    pub guest_team_id: i64,
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
    pub date: Option<NaiveDateTime>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub tour_number: i64,
    pub date: Option<NaiveDateTime>,
    pub home_team_id: i64,
    pub guest_team_id: i64,
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
}

impl From<Match> for MatchResponse {
    fn from(row: Match) -> Self {
        Self {
            id: row.id,
            tournament_id: row.tournament_id,
            tour_number: row.tour_number,
            date: row.date,
            home_team_id: row.home_team_id,
            guest_team_id: row.guest_team_id,
            home_score: row.home_score,
            guest_score: row.guest_score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListItem {
    pub id: i64,
    pub tournament_id: i64,
    pub tour_number: i64,
    pub date: Option<NaiveDateTime>,
    pub home_team_id: i64,
    pub home_team_name: String,
    pub guest_team_id: i64,
    pub guest_team_name: String,
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
}

impl From<MatchWithTeams> for MatchListItem {
    fn from(row: MatchWithTeams) -> Self {
        Self {
            id: row.id,
            tournament_id: row.tournament_id,
            tour_number: row.tour_number,
            date: row.date,
            home_team_id: row.home_team_id,
            home_team_name: row.home_team_name,
            guest_team_id: row.guest_team_id,
            guest_team_name: row.guest_team_name,
            home_score: row.home_score,
            guest_score: row.guest_score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMatch {
    pub home_team_id: i64,
    pub home_team_name: String,
    pub guest_team_id: i64,
    pub guest_team_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTour {
    pub tour_number: u32,
    pub matches: Vec<ScheduleMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_team_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCreated {
    pub tournament_id: i64,
    pub tours: usize,
    pub matches_created: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRowResponse {
    pub team_id: i64,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_scored: i64,
    pub goals_conceded: i64,
    pub goal_difference: i64,
}
