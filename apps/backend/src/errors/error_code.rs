//! Error codes for the league backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the league backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid tournament ID provided
    InvalidTournamentId,
    /// Invalid player ID provided
    InvalidPlayerId,
    /// Score submission does not contain exactly nine holes
    InvalidHoleCount,
    /// Score submission has no hole with a recorded score
    NoHoleScores,
    /// A submitted hole score is not a positive whole number
    InvalidHoleScore,
    /// Week start date could not be parsed
    InvalidWeek,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Tournament not found
    TournamentNotFound,
    /// Scorecard not found for the requested player and week
    ScorecardNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Scorecard already exists for this player and week
    ScorecardConflict,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,

    // Database Constraint Violations
    /// Unique constraint violation (generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (generic 409)
    FkViolation,
    /// Check constraint violation (generic 400)
    CheckViolation,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidTournamentId => "INVALID_TOURNAMENT_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::InvalidHoleCount => "INVALID_HOLE_COUNT",
            Self::NoHoleScores => "NO_HOLE_SCORES",
            Self::InvalidHoleScore => "INVALID_HOLE_SCORE",
            Self::InvalidWeek => "INVALID_WEEK",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            Self::ScorecardNotFound => "SCORECARD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::ScorecardConflict => "SCORECARD_CONFLICT",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            // Database Constraint Violations
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
