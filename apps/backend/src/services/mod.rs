pub mod recompute;
pub mod recompute_locks;
pub mod reports;
pub mod scorecards;
pub mod standings;
pub mod tournaments;
