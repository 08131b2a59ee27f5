//! SeaORM adapter for tournaments.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::tournaments;

pub mod dto;

pub use dto::TournamentCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find_by_id(tournament_id).one(conn).await
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let tournament = tournaments::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    tournament.insert(conn).await
}
