//! Type-safe wrappers and enums for MyFantasyLeague data.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::PlayerStatusFilter;
pub use ids::{FranchiseId, LeagueId, PlayerId};
pub use time::{ScoringPeriod, Week, Year};
