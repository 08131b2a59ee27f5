pub mod tournaments;
pub mod weekly_leaderboards;
pub mod weekly_matches;
pub mod weekly_scorecards;

pub use tournaments::Entity as Tournaments;
pub use tournaments::Model as Tournament;
pub use weekly_leaderboards::Entity as WeeklyLeaderboards;
pub use weekly_leaderboards::Model as WeeklyLeaderboard;
pub use weekly_matches::Entity as WeeklyMatches;
pub use weekly_matches::Model as WeeklyMatch;
pub use weekly_scorecards::Entity as WeeklyScorecards;
pub use weekly_scorecards::Model as WeeklyScorecard;
