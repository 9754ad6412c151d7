pub mod generator;
pub mod types;

pub use generator::generate_schedule;
pub use types::{Fixture, ScheduleError, Tour};
