use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Deserialize;
use time::Date;

use crate::domain::{current_week_start, parse_week_start};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct WeekQuery {
    week_start_date: Option<String>,
}

/// Week from the optional `week_start_date` query parameter, normalized to
/// its Monday. Defaults to the current UTC week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStart(pub Date);

impl FromRequest for WeekStart {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(week_from_query(req.query_string()))
    }
}

fn week_from_query(query: &str) -> Result<WeekStart, AppError> {
    let parsed = actix_web::web::Query::<WeekQuery>::from_query(query).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidWeek, "Malformed query string")
    })?;
    match parsed.into_inner().week_start_date.as_deref() {
        None | Some("") => Ok(WeekStart(current_week_start())),
        Some(raw) => Ok(WeekStart(parse_week_start(raw)?)),
    }
}
