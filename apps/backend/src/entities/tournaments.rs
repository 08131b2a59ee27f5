use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::weekly_scorecards::Entity")]
    WeeklyScorecards,
}

impl Related<super::weekly_scorecards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklyScorecards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
