//! Domain layer: pure scoring logic for weekly round-robin matches.

pub mod matchplay;
pub mod rules;
pub mod scorecard;
pub mod standings;
pub mod week;

#[cfg(test)]
mod tests_matchplay;
#[cfg(test)]
mod tests_standings;

// Re-exports for ergonomics
pub use matchplay::{score_pair, CanonicalPair, MatchWinner, PairScoring, PairVerdict, SideScoring};
pub use scorecard::{normalize_group_tag, HoleInput, HoleScores};
pub use standings::{aggregate_standings, MatchLine, MatchSide, Standing};
pub use week::{current_week_start, parse_week_start, week_start};
