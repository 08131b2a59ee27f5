use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::tournaments;
use crate::state::app_state::AppState;

fn positive_path_id(req: &HttpRequest, name: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{name} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// Tournament ID from the `{tournament_id}` path segment.
/// Resolves only for tournaments that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentId(pub i64);

impl FromRequest for TournamentId {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let tournament_id =
                positive_path_id(&req, "tournament_id", ErrorCode::InvalidTournamentId)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let db = require_db(app_state)?;

            tournaments::require_tournament(db, tournament_id).await?;
            Ok(TournamentId(tournament_id))
        })
    }
}

/// Player ID from the `{player_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub i64);

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(
            positive_path_id(req, "player_id", ErrorCode::InvalidPlayerId).map(PlayerId),
        )
    }
}
