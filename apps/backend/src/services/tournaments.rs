use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::tournaments::{self, Tournament};

#[derive(Debug, Default, Clone, Copy)]
pub struct TournamentService;

impl TournamentService {
    pub fn new() -> Self {
        Self
    }

    /// Create a tournament. Used for seeding; administration lives elsewhere.
    pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Tournament, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation_other("Tournament name must not be empty").into());
        }
        let tournament = tournaments::create_tournament(conn, name).await?;
        info!(tournament_id = tournament.id, "tournament created");
        Ok(tournament)
    }
}
