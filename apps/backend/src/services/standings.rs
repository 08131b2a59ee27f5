//! Read side of the weekly scoring engine.

use sea_orm::ConnectionTrait;
use time::Date;

use crate::domain::week_start;
use crate::error::AppError;
use crate::repos::leaderboards::{self, LeaderboardEntry};
use crate::repos::matches::{self, WeeklyMatch};
use crate::repos::tournaments;

#[derive(Debug, Default, Clone, Copy)]
pub struct StandingsService;

impl StandingsService {
    pub fn new() -> Self {
        Self
    }

    /// Ranked leaderboard: total score desc, hole points desc, player id asc.
    pub async fn get_leaderboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let week_start_date = week_start(week_start_date);
        tournaments::require_tournament(conn, tournament_id).await?;
        Ok(leaderboards::find_ranked(conn, tournament_id, week_start_date).await?)
    }

    pub async fn get_matches_for_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
        player_id: i64,
    ) -> Result<Vec<WeeklyMatch>, AppError> {
        let week_start_date = week_start(week_start_date);
        tournaments::require_tournament(conn, tournament_id).await?;
        Ok(matches::find_for_player(conn, tournament_id, week_start_date, player_id).await?)
    }
}
