//! SeaORM adapter for weekly leaderboards.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};
use time::{Date, OffsetDateTime};

use crate::entities::weekly_leaderboards;

pub mod dto;

pub use dto::StandingUpsert;

/// Leaderboard rows in ranking order: total desc, hole points desc, player id asc.
pub async fn find_ranked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<weekly_leaderboards::Model>, sea_orm::DbErr> {
    weekly_leaderboards::Entity::find()
        .filter(weekly_leaderboards::Column::TournamentId.eq(tournament_id))
        .filter(weekly_leaderboards::Column::WeekStartDate.eq(week_start_date))
        .order_by(weekly_leaderboards::Column::TotalScore, Order::Desc)
        .order_by(weekly_leaderboards::Column::TotalHolePoints, Order::Desc)
        .order_by(weekly_leaderboards::Column::PlayerId, Order::Asc)
        .all(conn)
        .await
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StandingUpsert,
) -> Result<(), sea_orm::DbErr> {
    let row = weekly_leaderboards::ActiveModel {
        id: NotSet,
        tournament_id: Set(dto.tournament_id),
        week_start_date: Set(dto.week_start_date),
        player_id: Set(dto.player_id),
        total_hole_points: Set(dto.total_hole_points),
        total_round_points: Set(dto.total_round_points),
        total_match_bonus: Set(dto.total_match_bonus),
        total_score: Set(dto.total_score),
        matches_played: Set(dto.matches_played),
        matches_won: Set(dto.matches_won),
        matches_tied: Set(dto.matches_tied),
        matches_lost: Set(dto.matches_lost),
        live_matches_played: Set(dto.live_matches_played),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    weekly_leaderboards::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                weekly_leaderboards::Column::TournamentId,
                weekly_leaderboards::Column::WeekStartDate,
                weekly_leaderboards::Column::PlayerId,
            ])
            .update_columns([
                weekly_leaderboards::Column::TotalHolePoints,
                weekly_leaderboards::Column::TotalRoundPoints,
                weekly_leaderboards::Column::TotalMatchBonus,
                weekly_leaderboards::Column::TotalScore,
                weekly_leaderboards::Column::MatchesPlayed,
                weekly_leaderboards::Column::MatchesWon,
                weekly_leaderboards::Column::MatchesTied,
                weekly_leaderboards::Column::MatchesLost,
                weekly_leaderboards::Column::LiveMatchesPlayed,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
