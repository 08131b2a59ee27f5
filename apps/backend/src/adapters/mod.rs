//! Adapters for external dependencies.

pub mod leaderboards_sea;
pub mod matches_sea;
pub mod scorecards_sea;
pub mod tournaments_sea;
