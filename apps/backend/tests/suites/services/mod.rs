pub mod concurrency;
pub mod leaderboard;
pub mod match_recompute;
