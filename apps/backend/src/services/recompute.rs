//! Full-pass recomputation of weekly matches and leaderboard.

use sea_orm::ConnectionTrait;
use time::Date;
use tracing::{debug, error, info, warn};

use crate::domain::{aggregate_standings, score_pair, week_start, CanonicalPair, PairVerdict};
use crate::error::AppError;
use crate::repos::matches::{self, MatchData};
use crate::repos::scorecards::{self, Scorecard};
use crate::repos::{leaderboards, tournaments};
use crate::services::recompute_locks::{RecomputeLocks, WeekKey};
use crate::services::reports::{
    LeaderboardRecomputeReport, MatchRecomputeReport, PairOutcome, StandingOutcome,
    WeekRecomputeReport,
};

/// Match and leaderboard recomputation service.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecomputeService;

impl RecomputeService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute every pairing for the tournament-week from current scorecards.
    ///
    /// Each pair is upserted independently; a failed write is recorded and the
    /// pass continues. Pairs with too few common holes are left untouched.
    /// Does not take the week lock.
    pub async fn recompute_matches<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
    ) -> MatchRecomputeReport {
        let week_start_date = week_start(week_start_date);
        let cards = match scorecards::find_all_for_week(conn, tournament_id, week_start_date).await
        {
            Ok(cards) => cards,
            Err(e) => {
                error!(
                    tournament_id,
                    week_start = %week_start_date,
                    error = %e,
                    "match recompute aborted: could not load scorecards"
                );
                return MatchRecomputeReport {
                    outcomes: Vec::new(),
                    aborted: Some(e),
                };
            }
        };

        let mut report = MatchRecomputeReport::default();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                let outcome = self
                    .recompute_pair(conn, tournament_id, week_start_date, a, b)
                    .await;
                report.outcomes.push(outcome);
            }
        }

        info!(
            tournament_id,
            week_start = %week_start_date,
            scorecards = cards.len(),
            written = report.written(),
            skipped = report.skipped(),
            failed = report.failed(),
            "match recompute finished"
        );
        report
    }

    async fn recompute_pair<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
        a: &Scorecard,
        b: &Scorecard,
    ) -> PairOutcome {
        let Some(pair) = CanonicalPair::new(a.player_id, b.player_id) else {
            return PairOutcome::SamePlayer {
                player_id: a.player_id,
            };
        };
        let (card1, card2) = if a.player_id == pair.player1_id() {
            (a, b)
        } else {
            (b, a)
        };
        let (player1_id, player2_id) = (pair.player1_id(), pair.player2_id());

        let scoring = match score_pair(&card1.hole_scores, &card2.hole_scores) {
            PairVerdict::Scored(scoring) => scoring,
            PairVerdict::InsufficientData { common_holes } => {
                debug!(
                    tournament_id,
                    player1_id, player2_id, common_holes, "pair skipped: not enough common holes"
                );
                return PairOutcome::InsufficientData {
                    player1_id,
                    player2_id,
                    common_holes,
                };
            }
        };

        let data = MatchData {
            tournament_id,
            week_start_date,
            pair,
            player1_scorecard_id: card1.id,
            player2_scorecard_id: card2.id,
            scoring,
        };
        match matches::upsert(conn, data).await {
            Ok(()) => PairOutcome::Written {
                player1_id,
                player2_id,
            },
            Err(error) => {
                error!(
                    tournament_id,
                    week_start = %week_start_date,
                    player1_id,
                    player2_id,
                    error = %error,
                    "match upsert failed"
                );
                PairOutcome::Failed {
                    player1_id,
                    player2_id,
                    error,
                }
            }
        }
    }

    /// Rebuild one leaderboard row per player appearing in the week's matches.
    /// Does not take the week lock.
    pub async fn recompute_leaderboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
    ) -> LeaderboardRecomputeReport {
        let week_start_date = week_start(week_start_date);
        let week_matches =
            match matches::find_all_for_week(conn, tournament_id, week_start_date).await {
                Ok(rows) => rows,
                Err(e) => {
                    error!(
                        tournament_id,
                        week_start = %week_start_date,
                        error = %e,
                        "leaderboard recompute aborted: could not load matches"
                    );
                    return LeaderboardRecomputeReport {
                        outcomes: Vec::new(),
                        aborted: Some(e),
                    };
                }
            };

        let standings = aggregate_standings(week_matches.iter().map(|m| m.line()));

        let mut report = LeaderboardRecomputeReport::default();
        for standing in &standings {
            let player_id = standing.player_id;
            let outcome =
                match leaderboards::upsert(conn, tournament_id, week_start_date, standing).await {
                    Ok(()) => StandingOutcome::Written { player_id },
                    Err(error) => {
                        error!(
                            tournament_id,
                            week_start = %week_start_date,
                            player_id,
                            error = %error,
                            "leaderboard upsert failed"
                        );
                        StandingOutcome::Failed { player_id, error }
                    }
                };
            report.outcomes.push(outcome);
        }

        info!(
            tournament_id,
            week_start = %week_start_date,
            matches = week_matches.len(),
            written = report.written(),
            failed = report.failed(),
            "leaderboard recompute finished"
        );
        report
    }

    /// Matches then leaderboard, with both passes run while holding the week lock.
    pub async fn recompute_week<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        locks: &RecomputeLocks,
        tournament_id: i64,
        week_start_date: Date,
    ) -> Result<WeekRecomputeReport, AppError> {
        let week_start_date = week_start(week_start_date);
        tournaments::require_tournament(conn, tournament_id).await?;

        let _guard = locks
            .acquire(WeekKey::new(tournament_id, week_start_date))
            .await;
        let report = self
            .run_locked(conn, tournament_id, week_start_date)
            .await;
        Ok(report)
    }

    /// Both passes in order. Caller must hold the week lock.
    pub(crate) async fn run_locked<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
        week_start_date: Date,
    ) -> WeekRecomputeReport {
        let matches = self
            .recompute_matches(conn, tournament_id, week_start_date)
            .await;
        let leaderboard = self
            .recompute_leaderboard(conn, tournament_id, week_start_date)
            .await;

        let report = WeekRecomputeReport {
            matches,
            leaderboard,
        };
        if !report.is_clean() {
            warn!(
                tournament_id,
                week_start = %week_start_date,
                match_failures = report.matches.failed(),
                leaderboard_failures = report.leaderboard.failed(),
                "recompute left stale rows; the next successful pass will repair them"
            );
        }
        report
    }
}
