//! Repository functions for the domain layer.

pub mod leaderboards;
pub mod matches;
pub mod scorecards;
pub mod tournaments;
