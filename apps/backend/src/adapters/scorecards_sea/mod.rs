//! SeaORM adapter for weekly scorecards.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};
use time::Date;

use crate::entities::weekly_scorecards;

pub mod dto;

pub use dto::ScorecardUpsert;

pub async fn find_one<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    player_id: i64,
) -> Result<Option<weekly_scorecards::Model>, sea_orm::DbErr> {
    weekly_scorecards::Entity::find()
        .filter(weekly_scorecards::Column::TournamentId.eq(tournament_id))
        .filter(weekly_scorecards::Column::WeekStartDate.eq(week_start_date))
        .filter(weekly_scorecards::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

/// All scorecards for a tournament-week, ordered by player id.
pub async fn find_all_for_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<weekly_scorecards::Model>, sea_orm::DbErr> {
    weekly_scorecards::Entity::find()
        .filter(weekly_scorecards::Column::TournamentId.eq(tournament_id))
        .filter(weekly_scorecards::Column::WeekStartDate.eq(week_start_date))
        .order_by(weekly_scorecards::Column::PlayerId, Order::Asc)
        .all(conn)
        .await
}

/// Insert or overwrite the scorecard keyed by (player, tournament, week).
/// `created_at` is only written on insert.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScorecardUpsert,
) -> Result<weekly_scorecards::Model, sea_orm::DbErr> {
    let (tournament_id, week_start_date, player_id) =
        (dto.tournament_id, dto.week_start_date, dto.player_id);

    let row = weekly_scorecards::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        tournament_id: Set(dto.tournament_id),
        week_start_date: Set(dto.week_start_date),
        hole_scores: Set(dto.hole_scores),
        total_score: Set(dto.total_score),
        is_live: Set(dto.is_live),
        group_tag: Set(dto.group_tag),
        submitted_at: Set(dto.submitted_at),
        created_at: Set(dto.submitted_at),
    };

    weekly_scorecards::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                weekly_scorecards::Column::PlayerId,
                weekly_scorecards::Column::TournamentId,
                weekly_scorecards::Column::WeekStartDate,
            ])
            .update_columns([
                weekly_scorecards::Column::HoleScores,
                weekly_scorecards::Column::TotalScore,
                weekly_scorecards::Column::IsLive,
                weekly_scorecards::Column::GroupTag,
                weekly_scorecards::Column::SubmittedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_one(conn, tournament_id, week_start_date, player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("weekly_scorecards".to_string()))
}
