//! Weekly leaderboard repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::Date;

use crate::adapters::leaderboards_sea as leaderboards_adapter;
use crate::domain::Standing;
use crate::entities::weekly_leaderboards;
use crate::errors::domain::DomainError;

/// Leaderboard entry domain model
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub standing: Standing,
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    standing: &Standing,
) -> Result<(), DomainError> {
    let dto = leaderboards_adapter::StandingUpsert {
        tournament_id,
        week_start_date,
        player_id: standing.player_id,
        total_hole_points: standing.total_hole_points,
        total_round_points: standing.total_round_points,
        total_match_bonus: standing.total_match_bonus,
        total_score: standing.total_score,
        matches_played: standing.matches_played,
        matches_won: standing.matches_won,
        matches_tied: standing.matches_tied,
        matches_lost: standing.matches_lost,
        live_matches_played: standing.live_matches_played,
    };
    leaderboards_adapter::upsert(conn, dto).await?;
    Ok(())
}

/// Entries in ranking order.
pub async fn find_ranked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<LeaderboardEntry>, DomainError> {
    let rows = leaderboards_adapter::find_ranked(conn, tournament_id, week_start_date).await?;
    Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
}

impl From<weekly_leaderboards::Model> for LeaderboardEntry {
    fn from(m: weekly_leaderboards::Model) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            week_start_date: m.week_start_date,
            standing: Standing {
                player_id: m.player_id,
                total_hole_points: m.total_hole_points,
                total_round_points: m.total_round_points,
                total_match_bonus: m.total_match_bonus,
                total_score: m.total_score,
                matches_played: m.matches_played,
                matches_won: m.matches_won,
                matches_tied: m.matches_tied,
                matches_lost: m.matches_lost,
                live_matches_played: m.live_matches_played,
            },
        }
    }
}
