use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Manager {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDateTime>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joined_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Team {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub code: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub achievements: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct TournamentType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: i64,
    pub manager_id: i64,
    pub tournament_type_id: i64,
    pub name: String,
    pub season: Option<String>,
    pub region: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct TournamentTeam {
    pub id: i64,
    pub tournament_id: i64,
    pub team_id: i64,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub tournament_id: i64,
    pub tour_number: i64,
    pub date: Option<NaiveDateTime>,
    pub home_team_id: i64,
    pub guest_team_id: i64,
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
}

// Partial update payloads. A None field leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TournamentChanges {
    pub name: Option<String>,
    pub tournament_type_id: Option<i64>,
    pub season: Option<String>,
    pub region: Option<String>,
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct MatchWithTeams {
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
