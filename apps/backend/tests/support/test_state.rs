use std::env;
use std::env::VarError;
use std::str::FromStr;

use league_backend::config::db::{DbKind, RuntimeEnv};
use league_backend::infra::state::{build_state, StateBuilder};
use league_backend::state::app_state::AppState;
use league_backend::AppError;

/// `LEAGUE_TEST_DB_KIND` picks the engine; unset means a private in-memory SQLite.
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    match env::var("LEAGUE_TEST_DB_KIND") {
        Ok(raw) => DbKind::from_str(&raw),
        Err(VarError::NotPresent) => Ok(DbKind::SqliteMemory),
        Err(e) => Err(AppError::config(format!(
            "failed to read LEAGUE_TEST_DB_KIND: {e}"
        ))),
    }
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    Ok(build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(resolve_test_db_kind()?))
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder()?.build().await
}
