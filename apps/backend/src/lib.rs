#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod web;


// Re-exports for public API
pub use config::db::{DbKind, DbOwner, RuntimeEnv};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use errors::ErrorCode;
pub use extractors::{PlayerId, TournamentId, ValidatedJson, WeekStart};
pub use infra::db::bootstrap_db;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::recompute::RecomputeService;
pub use services::recompute_locks::RecomputeLocks;
pub use services::scorecards::{ScoreSubmission, ScorecardService};
pub use services::standings::StandingsService;
pub use services::tournaments::TournamentService;
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::db::*;
    pub use super::domain::{CanonicalPair, HoleInput, HoleScores, Standing};
    pub use super::error::*;
    pub use super::services::reports::*;
    pub use super::state::app_state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
