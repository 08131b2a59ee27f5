//! Weekly scorecard repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};

use crate::adapters::scorecards_sea as scorecards_adapter;
use crate::domain::HoleScores;
use crate::entities::weekly_scorecards;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Scorecard domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub id: i64,
    pub player_id: i64,
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub hole_scores: HoleScores,
    pub total_score: i32,
    pub is_live: bool,
    pub group_tag: Option<String>,
    pub submitted_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// Data for writing a scorecard (reduces parameter count)
#[derive(Debug, Clone)]
pub struct ScorecardData {
    pub player_id: i64,
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub hole_scores: HoleScores,
    pub is_live: bool,
    pub group_tag: Option<String>,
    pub submitted_at: OffsetDateTime,
}

pub async fn find_one<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    player_id: i64,
) -> Result<Option<Scorecard>, DomainError> {
    scorecards_adapter::find_one(conn, tournament_id, week_start_date, player_id)
        .await?
        .map(Scorecard::try_from)
        .transpose()
}

/// Every scorecard for the tournament-week, ordered by player id.
pub async fn find_all_for_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<Scorecard>, DomainError> {
    scorecards_adapter::find_all_for_week(conn, tournament_id, week_start_date)
        .await?
        .into_iter()
        .map(Scorecard::try_from)
        .collect()
}

/// Write the full scorecard state; the total is derived from the holes.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    data: ScorecardData,
) -> Result<Scorecard, DomainError> {
    let hole_scores = serde_json::to_value(data.hole_scores.to_stored()).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialization".into()),
            format!("failed to encode hole scores: {e}"),
        )
    })?;
    let dto = scorecards_adapter::ScorecardUpsert {
        player_id: data.player_id,
        tournament_id: data.tournament_id,
        week_start_date: data.week_start_date,
        hole_scores,
        total_score: data.hole_scores.total(),
        is_live: data.is_live,
        group_tag: data.group_tag,
        submitted_at: data.submitted_at,
    };
    let model = scorecards_adapter::upsert(conn, dto).await?;
    Scorecard::try_from(model)
}

// Conversions between SeaORM models and domain models

impl TryFrom<weekly_scorecards::Model> for Scorecard {
    type Error = DomainError;

    fn try_from(model: weekly_scorecards::Model) -> Result<Self, Self::Error> {
        let stored: Vec<Option<i64>> = serde_json::from_value(model.hole_scores).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Scorecard {} has unreadable hole scores: {e}", model.id),
            )
        })?;
        Ok(Self {
            id: model.id,
            player_id: model.player_id,
            tournament_id: model.tournament_id,
            week_start_date: model.week_start_date,
            hole_scores: HoleScores::from_stored(&stored)?,
            total_score: model.total_score,
            is_live: model.is_live,
            group_tag: model.group_tag,
            submitted_at: model.submitted_at,
            created_at: model.created_at,
        })
    }
}
