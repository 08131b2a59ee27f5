//! Tournament repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::tournaments_sea as tournaments_adapter;
use crate::entities::tournaments;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Tournament domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<Tournament>, DomainError> {
    let tournament = tournaments_adapter::find_by_id(conn, tournament_id).await?;
    Ok(tournament.map(Tournament::from))
}

/// Like `find_by_id` but treats absence as `NotFound`.
pub async fn require_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Tournament, DomainError> {
    find_by_id(conn, tournament_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Tournament,
            format!("Tournament {tournament_id} not found"),
        )
    })
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Tournament, DomainError> {
    let dto = tournaments_adapter::TournamentCreate::new(name);
    let tournament = tournaments_adapter::create_tournament(conn, dto).await?;
    Ok(Tournament::from(tournament))
}

impl From<tournaments::Model> for Tournament {
    fn from(model: tournaments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
