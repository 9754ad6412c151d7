pub mod aggregator;
pub mod types;

pub use aggregator::build_standings;
pub use types::{MatchResult, StandingsRow};
