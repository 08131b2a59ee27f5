//! Scorecard ingestion: validate, merge, persist, then recompute the week.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::domain::{normalize_group_tag, week_start, HoleInput, HoleScores};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::scorecards::{self, Scorecard, ScorecardData};
use crate::repos::tournaments;
use crate::services::recompute::RecomputeService;
use crate::services::recompute_locks::{RecomputeLocks, WeekKey};
use crate::services::reports::SubmissionReport;

/// One incoming score submission
#[derive(Debug, Clone)]
pub struct ScoreSubmission {
    pub tournament_id: i64,
    pub player_id: i64,
    pub week_start_date: Date,
    pub holes: Vec<HoleInput>,
    pub is_live: bool,
    pub group_tag: Option<String>,
}

/// Scorecard domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScorecardService {
    recompute: RecomputeService,
}

impl ScorecardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and merge a submission into the stored card, then recompute
    /// matches and leaderboard for the week.
    ///
    /// The week is keyed by its Monday, whatever day of the week is passed.
    /// Validation failures reject the write. Recompute failures do not: they
    /// are reported in the returned batch reports.
    pub async fn submit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        locks: &RecomputeLocks,
        submission: ScoreSubmission,
    ) -> Result<SubmissionReport, AppError> {
        let ScoreSubmission {
            tournament_id,
            player_id,
            week_start_date,
            holes,
            is_live,
            group_tag,
        } = submission;
        let week_start_date = week_start(week_start_date);

        if player_id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidPlayerId,
                format!("Player ID must be positive, got {player_id}"),
            ));
        }
        let incoming = HoleScores::from_submission(&holes)?;
        let group_tag = normalize_group_tag(group_tag.as_deref())?;

        tournaments::require_tournament(conn, tournament_id).await?;

        let _guard = locks
            .acquire(WeekKey::new(tournament_id, week_start_date))
            .await;

        let existing = scorecards::find_one(conn, tournament_id, week_start_date, player_id).await?;
        let (hole_scores, group_tag) = match &existing {
            Some(stored) => (
                stored.hole_scores.merge(&incoming),
                group_tag.or_else(|| stored.group_tag.clone()),
            ),
            None => (incoming, group_tag),
        };

        let scorecard = scorecards::upsert(
            conn,
            ScorecardData {
                player_id,
                tournament_id,
                week_start_date,
                hole_scores,
                is_live,
                group_tag,
                submitted_at: OffsetDateTime::now_utc(),
            },
        )
        .await?;

        info!(
            tournament_id,
            player_id,
            week_start = %week_start_date,
            holes_set = scorecard.hole_scores.set_count(),
            total_score = scorecard.total_score,
            merged = existing.is_some(),
            "scorecard stored"
        );

        let week = self
            .recompute
            .run_locked(conn, tournament_id, week_start_date)
            .await;

        Ok(SubmissionReport {
            scorecard,
            matches: week.matches,
            leaderboard: week.leaderboard,
        })
    }

    pub async fn get_scorecard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
        player_id: i64,
    ) -> Result<Scorecard, AppError> {
        let week_start_date = week_start(week_start_date);
        tournaments::require_tournament(conn, tournament_id).await?;
        let scorecard = scorecards::find_one(conn, tournament_id, week_start_date, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Scorecard,
                    format!("No scorecard for player {player_id} in week {week_start_date}"),
                )
            })?;
        Ok(scorecard)
    }
}
