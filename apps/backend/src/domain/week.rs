use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::errors::domain::{DomainError, ValidationKind};

/// The Monday on or before `date`.
pub fn week_start(date: Date) -> Date {
    let offset = i64::from(date.weekday().number_days_from_monday());
    date.saturating_sub(Duration::days(offset))
}

/// Week start for today's UTC date.
pub fn current_week_start() -> Date {
    week_start(OffsetDateTime::now_utc().date())
}

/// Parse a `YYYY-MM-DD` date and normalize it to its week start.
pub fn parse_week_start(raw: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format)
        .map(week_start)
        .map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidWeek,
                format!("week_start_date must be a YYYY-MM-DD date, got '{raw}'"),
            )
        })
}
