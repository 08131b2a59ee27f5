//! Weekly scoring HTTP routes, mounted under `/api/tournaments/{tournament_id}`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use crate::db::require_db;
use crate::domain::HoleInput;
use crate::error::AppError;
use crate::extractors::{PlayerId, TournamentId, ValidatedJson, WeekStart};
use crate::repos::leaderboards::LeaderboardEntry;
use crate::repos::matches::{MatchPoints, WeeklyMatch};
use crate::repos::scorecards::Scorecard;
use crate::services::recompute::RecomputeService;
use crate::services::reports::WeekRecomputeReport;
use crate::services::scorecards::{ScoreSubmission, ScorecardService};
use crate::services::standings::StandingsService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitScorecardRequest {
    /// Nine entries; `null` or `0` leave a hole unset.
    pub hole_scores: Vec<Value>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub group_tag: Option<String>,
}

/// Map one wire value onto a hole input. Range checks happen in the domain.
fn hole_input(value: &Value) -> HoleInput {
    match value {
        Value::Null => HoleInput::Unset,
        Value::Number(n) => {
            if let Some(strokes) = n.as_i64() {
                HoleInput::Strokes(strokes)
            } else if n.is_u64() {
                HoleInput::Invalid
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 / 2.0 => {
                        HoleInput::Strokes(f as i64)
                    }
                    _ => HoleInput::Invalid,
                }
            }
        }
        _ => HoleInput::Invalid,
    }
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

#[derive(Debug, Serialize)]
pub struct ScorecardResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub week_start_date: String,
    pub hole_scores: Vec<Option<i64>>,
    pub total_score: i32,
    pub is_live: bool,
    pub group_tag: Option<String>,
    pub submitted_at: String,
}

impl From<Scorecard> for ScorecardResponse {
    fn from(card: Scorecard) -> Self {
        Self {
            id: card.id,
            tournament_id: card.tournament_id,
            player_id: card.player_id,
            week_start_date: card.week_start_date.to_string(),
            hole_scores: card.hole_scores.to_stored(),
            total_score: card.total_score,
            is_live: card.is_live,
            group_tag: card.group_tag,
            submitted_at: rfc3339(card.submitted_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchSideResponse {
    pub player_id: i64,
    pub scorecard_id: i64,
    pub hole_points: f64,
    pub round_points: [f64; 3],
    pub live_bonus: f64,
    pub total_points: f64,
}

impl From<MatchPoints> for MatchSideResponse {
    fn from(p: MatchPoints) -> Self {
        Self {
            player_id: p.player_id,
            scorecard_id: p.scorecard_id,
            hole_points: p.hole_points,
            round_points: p.round_points,
            live_bonus: p.live_bonus,
            total_points: p.total_points,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: i64,
    pub week_start_date: String,
    pub player1: MatchSideResponse,
    pub player2: MatchSideResponse,
    /// `null` on a tie.
    pub match_winner_id: Option<i64>,
    pub created_at: String,
}

impl From<WeeklyMatch> for MatchResponse {
    fn from(m: WeeklyMatch) -> Self {
        Self {
            id: m.id,
            week_start_date: m.week_start_date.to_string(),
            player1: m.player1.into(),
            player2: m.player2.into(),
            match_winner_id: m.match_winner_id,
            created_at: rfc3339(m.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardRowResponse {
    pub rank: usize,
    pub player_id: i64,
    pub total_hole_points: f64,
    pub total_round_points: f64,
    pub total_match_bonus: f64,
    pub total_score: f64,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
    pub live_matches_played: i32,
}

impl LeaderboardRowResponse {
    fn ranked(rank: usize, entry: LeaderboardEntry) -> Self {
        let s = entry.standing;
        Self {
            rank,
            player_id: s.player_id,
            total_hole_points: s.total_hole_points,
            total_round_points: s.total_round_points,
            total_match_bonus: s.total_match_bonus,
            total_score: s.total_score,
            matches_played: s.matches_played,
            matches_won: s.matches_won,
            matches_tied: s.matches_tied,
            matches_lost: s.matches_lost,
            live_matches_played: s.live_matches_played,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub week_start_date: String,
    pub entries: Vec<LeaderboardRowResponse>,
}

#[derive(Debug, Serialize)]
pub struct PassSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub aborted: bool,
}

#[derive(Debug, Serialize)]
pub struct RecomputeResponse {
    pub week_start_date: String,
    pub matches: PassSummary,
    pub leaderboard: PassSummary,
    pub clean: bool,
}

impl RecomputeResponse {
    fn new(week_start_date: Date, report: &WeekRecomputeReport) -> Self {
        Self {
            week_start_date: week_start_date.to_string(),
            matches: PassSummary {
                written: report.matches.written(),
                skipped: report.matches.skipped(),
                failed: report.matches.failed(),
                aborted: report.matches.aborted.is_some(),
            },
            leaderboard: PassSummary {
                written: report.leaderboard.written(),
                skipped: report.leaderboard.skipped(),
                failed: report.leaderboard.failed(),
                aborted: report.leaderboard.aborted.is_some(),
            },
            clean: report.is_clean(),
        }
    }
}

/// POST /players/{player_id}/weekly-scorecard
///
/// Merges the submitted holes into the player's card for the week and
/// recomputes the week. Recompute trouble is logged, not returned.
async fn submit_scorecard(
    tournament_id: TournamentId,
    player_id: PlayerId,
    week: WeekStart,
    body: ValidatedJson<SubmitScorecardRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardResponse>, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();

    let submission = ScoreSubmission {
        tournament_id: tournament_id.0,
        player_id: player_id.0,
        week_start_date: week.0,
        holes: body.hole_scores.iter().map(hole_input).collect(),
        is_live: body.is_live,
        group_tag: body.group_tag,
    };

    let report = ScorecardService::new()
        .submit(db, app_state.recompute_locks(), submission)
        .await?;
    Ok(web::Json(report.scorecard.into()))
}

/// GET /players/{player_id}/weekly-scorecard
async fn get_scorecard(
    tournament_id: TournamentId,
    player_id: PlayerId,
    week: WeekStart,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardResponse>, AppError> {
    let db = require_db(&app_state)?;
    let card = ScorecardService::new()
        .get_scorecard(db, tournament_id.0, week.0, player_id.0)
        .await?;
    Ok(web::Json(card.into()))
}

/// GET /players/{player_id}/weekly-matches
async fn get_player_matches(
    tournament_id: TournamentId,
    player_id: PlayerId,
    week: WeekStart,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<MatchResponse>>, AppError> {
    let db = require_db(&app_state)?;
    let rows = StandingsService::new()
        .get_matches_for_player(db, tournament_id.0, week.0, player_id.0)
        .await?;
    Ok(web::Json(rows.into_iter().map(MatchResponse::from).collect()))
}

/// GET /weekly-leaderboard
async fn get_leaderboard(
    tournament_id: TournamentId,
    week: WeekStart,
    app_state: web::Data<AppState>,
) -> Result<web::Json<LeaderboardResponse>, AppError> {
    let db = require_db(&app_state)?;
    let entries = StandingsService::new()
        .get_leaderboard(db, tournament_id.0, week.0)
        .await?;
    Ok(web::Json(LeaderboardResponse {
        week_start_date: week.0.to_string(),
        entries: entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| LeaderboardRowResponse::ranked(i + 1, e))
            .collect(),
    }))
}

/// POST /weekly-recompute
async fn recompute_week(
    tournament_id: TournamentId,
    week: WeekStart,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let report = RecomputeService::new()
        .recompute_week(db, app_state.recompute_locks(), tournament_id.0, week.0)
        .await?;
    Ok(HttpResponse::Ok().json(RecomputeResponse::new(week.0, &report)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players/{player_id}/weekly-scorecard")
            .route(web::post().to(submit_scorecard))
            .route(web::get().to(get_scorecard)),
    );
    cfg.service(
        web::resource("/players/{player_id}/weekly-matches")
            .route(web::get().to(get_player_matches)),
    );
    cfg.service(web::resource("/weekly-leaderboard").route(web::get().to(get_leaderboard)));
    cfg.service(web::resource("/weekly-recompute").route(web::post().to(recompute_week)));
}
