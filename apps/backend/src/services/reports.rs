//! Batch outcomes of a recompute pass.
//!
//! Recomputation never fails as a whole: each pair or player is recorded
//! with its own outcome so callers can inspect what was written, skipped
//! or failed.

use crate::errors::domain::DomainError;
use crate::repos::scorecards::Scorecard;

#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    Written {
        player1_id: i64,
        player2_id: i64,
    },
    /// Not enough holes scored by both players yet; nothing written.
    InsufficientData {
        player1_id: i64,
        player2_id: i64,
        common_holes: usize,
    },
    SamePlayer {
        player_id: i64,
    },
    Failed {
        player1_id: i64,
        player2_id: i64,
        error: DomainError,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchRecomputeReport {
    pub outcomes: Vec<PairOutcome>,
    /// Set when the week's scorecards could not be read at all.
    pub aborted: Option<DomainError>,
}

impl MatchRecomputeReport {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, PairOutcome::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                PairOutcome::InsufficientData { .. } | PairOutcome::SamePlayer { .. }
            )
        })
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PairOutcome::Failed { .. }))
    }

    pub fn is_clean(&self) -> bool {
        self.aborted.is_none() && self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&PairOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StandingOutcome {
    Written { player_id: i64 },
    Failed { player_id: i64, error: DomainError },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaderboardRecomputeReport {
    pub outcomes: Vec<StandingOutcome>,
    /// Set when the week's matches could not be read at all.
    pub aborted: Option<DomainError>,
}

impl LeaderboardRecomputeReport {
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StandingOutcome::Written { .. }))
            .count()
    }

    /// Standings are never skipped; kept for parity with match reports.
    pub fn skipped(&self) -> usize {
        0
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StandingOutcome::Failed { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.aborted.is_none() && self.failed() == 0
    }
}

/// Match pass followed by leaderboard pass for one tournament-week.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeekRecomputeReport {
    pub matches: MatchRecomputeReport,
    pub leaderboard: LeaderboardRecomputeReport,
}

impl WeekRecomputeReport {
    pub fn is_clean(&self) -> bool {
        self.matches.is_clean() && self.leaderboard.is_clean()
    }
}

/// Result of a scorecard submission: the persisted card plus the recompute it triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub scorecard: Scorecard,
    pub matches: MatchRecomputeReport,
    pub leaderboard: LeaderboardRecomputeReport,
}
