use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_leaderboards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_name = "week_start_date")]
    pub week_start_date: Date,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "total_hole_points")]
    pub total_hole_points: f64,
    #[sea_orm(column_name = "total_round_points")]
    pub total_round_points: f64,
    #[sea_orm(column_name = "total_match_bonus")]
    pub total_match_bonus: f64,
    #[sea_orm(column_name = "total_score")]
    pub total_score: f64,
    #[sea_orm(column_name = "matches_played")]
    pub matches_played: i32,
    #[sea_orm(column_name = "matches_won")]
    pub matches_won: i32,
    #[sea_orm(column_name = "matches_tied")]
    pub matches_tied: i32,
    #[sea_orm(column_name = "matches_lost")]
    pub matches_lost: i32,
    #[sea_orm(column_name = "live_matches_played")]
    pub live_matches_played: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournaments::Entity",
        from = "Column::TournamentId",
        to = "super::tournaments::Column::Id"
    )]
    Tournament,
}

impl Related<super::tournaments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
