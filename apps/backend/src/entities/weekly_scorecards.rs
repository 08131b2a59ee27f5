use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_scorecards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_name = "week_start_date")]
    pub week_start_date: Date,
    /// JSON array of nine entries, `null` for an unset hole.
    #[sea_orm(column_name = "hole_scores")]
    pub hole_scores: Json,
    #[sea_orm(column_name = "total_score")]
    pub total_score: i32,
    #[sea_orm(column_name = "is_live")]
    pub is_live: bool,
    #[sea_orm(column_name = "group_tag")]
    pub group_tag: Option<String>,
    #[sea_orm(column_name = "submitted_at")]
    pub submitted_at: OffsetDateTime,
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
