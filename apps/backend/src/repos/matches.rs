//! Weekly match repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};

use crate::adapters::matches_sea as matches_adapter;
use crate::domain::{CanonicalPair, MatchLine, MatchSide, PairScoring};
use crate::entities::weekly_matches;
use crate::errors::domain::DomainError;

/// Points one player earned in a stored match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPoints {
    pub player_id: i64,
    pub scorecard_id: i64,
    pub hole_points: f64,
    pub round_points: [f64; 3],
    pub live_bonus: f64,
    pub total_points: f64,
}

/// Match domain model
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyMatch {
    pub id: i64,
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub player1: MatchPoints,
    pub player2: MatchPoints,
    /// `None` means tied.
    pub match_winner_id: Option<i64>,
    pub created_at: OffsetDateTime,
}

impl WeeklyMatch {
    /// View used by the leaderboard aggregator.
    pub fn line(&self) -> MatchLine {
        let side = |p: &MatchPoints| MatchSide {
            player_id: p.player_id,
            hole_points: p.hole_points,
            round_points: p.round_points.iter().sum(),
            live_bonus: p.live_bonus,
        };
        MatchLine {
            player1: side(&self.player1),
            player2: side(&self.player2),
            winner_id: self.match_winner_id,
        }
    }
}

/// Everything needed to write one match row
#[derive(Debug, Clone)]
pub struct MatchData {
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub pair: CanonicalPair,
    pub player1_scorecard_id: i64,
    pub player2_scorecard_id: i64,
    pub scoring: PairScoring,
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    data: MatchData,
) -> Result<(), DomainError> {
    let MatchData {
        tournament_id,
        week_start_date,
        pair,
        player1_scorecard_id,
        player2_scorecard_id,
        scoring,
    } = data;
    let (s1, s2) = (scoring.player1, scoring.player2);

    let dto = matches_adapter::MatchUpsert {
        tournament_id,
        week_start_date,
        player1_id: pair.player1_id(),
        player2_id: pair.player2_id(),
        player1_scorecard_id,
        player2_scorecard_id,
        hole_points: [s1.hole_points, s2.hole_points],
        round1_points: [s1.round_points[0], s2.round_points[0]],
        round2_points: [s1.round_points[1], s2.round_points[1]],
        round3_points: [s1.round_points[2], s2.round_points[2]],
        live_bonus: [s1.live_bonus, s2.live_bonus],
        total_points: [s1.total_points(), s2.total_points()],
        match_winner_id: scoring.winner.player_id(&pair),
    };
    matches_adapter::upsert(conn, dto).await?;
    Ok(())
}

pub async fn find_all_for_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
) -> Result<Vec<WeeklyMatch>, DomainError> {
    let rows = matches_adapter::find_all_for_week(conn, tournament_id, week_start_date).await?;
    Ok(rows.into_iter().map(WeeklyMatch::from).collect())
}

/// Matches where the player is on either side, oldest first.
pub async fn find_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    player_id: i64,
) -> Result<Vec<WeeklyMatch>, DomainError> {
    let rows =
        matches_adapter::find_for_player(conn, tournament_id, week_start_date, player_id).await?;
    Ok(rows.into_iter().map(WeeklyMatch::from).collect())
}

pub async fn find_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    week_start_date: Date,
    pair: CanonicalPair,
) -> Result<Option<WeeklyMatch>, DomainError> {
    let row = matches_adapter::find_pair(
        conn,
        tournament_id,
        week_start_date,
        pair.player1_id(),
        pair.player2_id(),
    )
    .await?;
    Ok(row.map(WeeklyMatch::from))
}

// Conversions between SeaORM models and domain models

impl From<weekly_matches::Model> for WeeklyMatch {
    fn from(m: weekly_matches::Model) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            week_start_date: m.week_start_date,
            player1: MatchPoints {
                player_id: m.player1_id,
                scorecard_id: m.player1_scorecard_id,
                hole_points: m.hole_points_player1,
                round_points: [
                    m.round1_points_player1,
                    m.round2_points_player1,
                    m.round3_points_player1,
                ],
                live_bonus: m.match_live_bonus_player1,
                total_points: m.total_points_player1,
            },
            player2: MatchPoints {
                player_id: m.player2_id,
                scorecard_id: m.player2_scorecard_id,
                hole_points: m.hole_points_player2,
                round_points: [
                    m.round1_points_player2,
                    m.round2_points_player2,
                    m.round3_points_player2,
                ],
                live_bonus: m.match_live_bonus_player2,
                total_points: m.total_points_player2,
            },
            match_winner_id: m.match_winner_id,
            created_at: m.created_at,
        }
    }
}
