/// A match result as handed over by the persistence layer. Either score
/// being absent marks the match as not played yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<T> {
    pub home: T,
    pub guest: T,
    pub home_score: Option<i64>,
    pub guest_score: Option<i64>,
}

impl<T> MatchResult<T> {
    pub fn played(home: T, guest: T, home_score: i64, guest_score: i64) -> Self {
        Self {
            home,
            guest,
            home_score: Some(home_score),
            guest_score: Some(guest_score),
        }
    }

    pub fn pending(home: T, guest: T) -> Self {
        Self {
            home,
            guest,
            home_score: None,
            guest_score: None,
        }
    }
}

/// One ranked line of a standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow<T> {
    pub team: T,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_scored: i64,
    pub goals_conceded: i64,
    pub goal_difference: i64,
}

impl<T> StandingsRow<T> {
    pub(crate) fn new(team: T) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
            goals_scored: 0,
            goals_conceded: 0,
            goal_difference: 0,
        }
    }
}
