use thiserror::Error;

/// A single pairing within a tour. `home` hosts `guest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture<T> {
    pub home: T,
    pub guest: T,
}

/// One round of the competition: every team plays at most once per tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour<T> {
    /// Tour numbers are contiguous and start at 1.
    pub number: u32,
    pub fixtures: Vec<Fixture<T>>,
    /// Team left without an opponent this tour. Only populated for
    /// odd-sized fields when `ScheduleSettings::show_idle_team` is set.
    pub idle: Option<T>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("a schedule needs at least two teams, got {0}")]
    NotEnoughTeams(usize),
    #[error("schedule input contains the same team more than once")]
    DuplicateTeam,
}
