//! SeaORM adapter for weekly matches.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder,
    Set,
};
use time::{Date, OffsetDateTime};

use crate::entities::weekly_matches;

pub mod dto;

pub use dto::MatchUpsert;

fn week_filter(tournament_id: i64, week_start_date: Date) -> Condition {
    Condition::all()
        .add(weekly_matches::Column::TournamentId.eq(tournament_id))
        .add(weekly_matches::Column::WeekStartDate.eq(week_start_date))
}

/// All matches for a tournament-week, ordered by id.
pub async fn find_all_for_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<weekly_matches::Model>, sea_orm::DbErr> {
    weekly_matches::Entity::find()
        .filter(week_filter(tournament_id, week_start_date))
        .order_by(weekly_matches::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Matches involving `player_id` on either side, oldest first.
pub async fn find_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    player_id: i64,
) -> Result<Vec<weekly_matches::Model>, sea_orm::DbErr> {
    weekly_matches::Entity::find()
        .filter(week_filter(tournament_id, week_start_date))
        .filter(
            Condition::any()
                .add(weekly_matches::Column::Player1Id.eq(player_id))
                .add(weekly_matches::Column::Player2Id.eq(player_id)),
        )
        .order_by(weekly_matches::Column::CreatedAt, Order::Asc)
        .order_by(weekly_matches::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    player1_id: i64,
    player2_id: i64,
) -> Result<Option<weekly_matches::Model>, sea_orm::DbErr> {
    weekly_matches::Entity::find()
        .filter(week_filter(tournament_id, week_start_date))
        .filter(weekly_matches::Column::Player1Id.eq(player1_id))
        .filter(weekly_matches::Column::Player2Id.eq(player2_id))
        .one(conn)
        .await
}

/// Insert or overwrite one match. Every computed column is replaced; `created_at` is insert-only.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchUpsert,
) -> Result<(), sea_orm::DbErr> {
    let row = weekly_matches::ActiveModel {
        id: NotSet,
        tournament_id: Set(dto.tournament_id),
        week_start_date: Set(dto.week_start_date),
        player1_id: Set(dto.player1_id),
        player2_id: Set(dto.player2_id),
        player1_scorecard_id: Set(dto.player1_scorecard_id),
        player2_scorecard_id: Set(dto.player2_scorecard_id),
        hole_points_player1: Set(dto.hole_points[0]),
        hole_points_player2: Set(dto.hole_points[1]),
        round1_points_player1: Set(dto.round1_points[0]),
        round1_points_player2: Set(dto.round1_points[1]),
        round2_points_player1: Set(dto.round2_points[0]),
        round2_points_player2: Set(dto.round2_points[1]),
        round3_points_player1: Set(dto.round3_points[0]),
        round3_points_player2: Set(dto.round3_points[1]),
        match_winner_id: Set(dto.match_winner_id),
        match_live_bonus_player1: Set(dto.live_bonus[0]),
        match_live_bonus_player2: Set(dto.live_bonus[1]),
        total_points_player1: Set(dto.total_points[0]),
        total_points_player2: Set(dto.total_points[1]),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    weekly_matches::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                weekly_matches::Column::TournamentId,
                weekly_matches::Column::WeekStartDate,
                weekly_matches::Column::Player1Id,
                weekly_matches::Column::Player2Id,
            ])
            .update_columns([
                weekly_matches::Column::Player1ScorecardId,
                weekly_matches::Column::Player2ScorecardId,
                weekly_matches::Column::HolePointsPlayer1,
                weekly_matches::Column::HolePointsPlayer2,
                weekly_matches::Column::Round1PointsPlayer1,
                weekly_matches::Column::Round1PointsPlayer2,
                weekly_matches::Column::Round2PointsPlayer1,
                weekly_matches::Column::Round2PointsPlayer2,
                weekly_matches::Column::Round3PointsPlayer1,
                weekly_matches::Column::Round3PointsPlayer2,
                weekly_matches::Column::MatchWinnerId,
                weekly_matches::Column::MatchLiveBonusPlayer1,
                weekly_matches::Column::MatchLiveBonusPlayer2,
                weekly_matches::Column::TotalPointsPlayer1,
                weekly_matches::Column::TotalPointsPlayer2,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
