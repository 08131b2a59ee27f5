use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment for the database profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Storage engine backing the league database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DbKind::Postgres => "postgres",
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
        }
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Engine-specific session settings applied to every pooled connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbSettings {
    Sqlite {
        busy_timeout_ms: u32,
    },
    Postgres {
        app_name: String,
        statement_timeout: String,
        idle_in_transaction_timeout: String,
    },
}

/// Pool sizing and session settings for one database kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub db_settings: DbSettings,
}

impl ConnectionSettings {
    pub fn for_kind(env: RuntimeEnv, db_kind: DbKind) -> Self {
        match db_kind {
            // Every in-memory connection is its own database, so the pool holds exactly one.
            DbKind::SqliteMemory => Self {
                pool_min: 1,
                pool_max: 1,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
            DbKind::SqliteFile => Self {
                pool_min: 1,
                pool_max: 4,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
            DbKind::Postgres => {
                let cpus = num_cpus::get() as u32;
                let (pool_min, pool_max) = match env {
                    RuntimeEnv::Prod => (2, (cpus * 4).clamp(8, 32)),
                    RuntimeEnv::Test => (1, cpus.clamp(2, 8)),
                };
                Self {
                    pool_min,
                    pool_max,
                    acquire_timeout_ms: 3_000,
                    db_settings: DbSettings::Postgres {
                        app_name: "league-backend".to_string(),
                        statement_timeout: "15s".to_string(),
                        idle_in_transaction_timeout: "60s".to_string(),
                    },
                }
            }
        }
    }
}

/// Build a connection string for the given environment, engine and owner
pub fn make_conn_spec(env: RuntimeEnv, db_kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match db_kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::SqliteFile => {
            let path = must_var("SQLITE_DB_PATH")?;
            Ok(format!("sqlite:{path}"))
        }
        DbKind::Postgres => {
            let host = host();
            let port = port()?;
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Reject environment/engine combinations that cannot be bootstrapped
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), AppError> {
    if env == RuntimeEnv::Prod && db_kind == DbKind::SqliteMemory {
        return Err(AppError::config(
            "In-memory SQLite is not allowed for the production profile",
        ));
    }
    Ok(())
}

/// Read the database kind from an environment variable, falling back to a default
pub fn db_kind_from_env(var: &str, default: DbKind) -> Result<DbKind, AppError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(default),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> Result<u16, AppError> {
    match env::var("POSTGRES_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("POSTGRES_PORT must be a port number, got '{raw}'"))),
        Err(_) => Ok(5432),
    }
}

/// Get database name based on profile
fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("LEAGUE_OWNER_USER")?,
            must_var("LEAGUE_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
