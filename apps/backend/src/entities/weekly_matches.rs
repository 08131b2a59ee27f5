use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_name = "week_start_date")]
    pub week_start_date: Date,
    #[sea_orm(column_name = "player1_id")]
    pub player1_id: i64,
    #[sea_orm(column_name = "player2_id")]
    pub player2_id: i64,
    #[sea_orm(column_name = "player1_scorecard_id")]
    pub player1_scorecard_id: i64,
    #[sea_orm(column_name = "player2_scorecard_id")]
    pub player2_scorecard_id: i64,
    #[sea_orm(column_name = "hole_points_player1")]
    pub hole_points_player1: f64,
    #[sea_orm(column_name = "hole_points_player2")]
    pub hole_points_player2: f64,
    #[sea_orm(column_name = "round1_points_player1")]
    pub round1_points_player1: f64,
    #[sea_orm(column_name = "round1_points_player2")]
    pub round1_points_player2: f64,
    #[sea_orm(column_name = "round2_points_player1")]
    pub round2_points_player1: f64,
    #[sea_orm(column_name = "round2_points_player2")]
    pub round2_points_player2: f64,
    #[sea_orm(column_name = "round3_points_player1")]
    pub round3_points_player1: f64,
    #[sea_orm(column_name = "round3_points_player2")]
    pub round3_points_player2: f64,
    #[sea_orm(column_name = "match_winner_id")]
    pub match_winner_id: Option<i64>,
    #[sea_orm(column_name = "match_live_bonus_player1")]
    pub match_live_bonus_player1: f64,
    #[sea_orm(column_name = "match_live_bonus_player2")]
    pub match_live_bonus_player2: f64,
    #[sea_orm(column_name = "total_points_player1")]
    pub total_points_player1: f64,
    #[sea_orm(column_name = "total_points_player2")]
    pub total_points_player2: f64,
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
