//! Connection pools and schema bootstrap.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{
    make_conn_spec, validate_db_config, ConnectionSettings, DbKind, DbOwner, DbSettings,
    RuntimeEnv,
};
use crate::error::AppError;

/// Retry a connection attempt with fixed interval delays
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    attempt,
                    max_attempts, interval_ms, "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Build ordered session-level SQL statements for the given settings.
fn build_session_statements(settings: &DbSettings) -> Vec<String> {
    match settings {
        DbSettings::Sqlite { busy_timeout_ms } => vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {busy_timeout_ms};"),
        ],
        DbSettings::Postgres {
            app_name,
            statement_timeout,
            idle_in_transaction_timeout,
        } => vec![
            format!("SET application_name = '{}';", app_name.replace('\'', "''")),
            "SET timezone = 'UTC';".to_string(),
            format!("SET statement_timeout = '{statement_timeout}';"),
            format!("SET idle_in_transaction_session_timeout = '{idle_in_transaction_timeout}';"),
        ],
    }
}

async fn build_sqlite_pool(
    url: &str,
    db_kind: DbKind,
    pool_cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let statements = build_session_statements(&pool_cfg.db_settings);
    let mut options = SqlitePoolOptions::new()
        .min_connections(pool_cfg.pool_min)
        .max_connections(pool_cfg.pool_max)
        .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms))
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in &statements {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        });

    // Dropping the only in-memory connection drops the database with it.
    if db_kind == DbKind::SqliteMemory {
        options = options.idle_timeout(None).max_lifetime(None);
    }

    let pool: SqlitePool = options
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    info!(
        engine = "sqlite",
        db_kind = db_kind.as_str(),
        min = pool_cfg.pool_min,
        max = pool_cfg.pool_max,
        acquire_timeout_ms = pool_cfg.acquire_timeout_ms,
        "pool=create"
    );
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn build_postgres_pool(
    url: &str,
    pool_cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let statements = build_session_statements(&pool_cfg.db_settings);
    let sqlx_pool = PgPoolOptions::new()
        .min_connections(pool_cfg.pool_min)
        .max_connections(pool_cfg.pool_max)
        .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms))
        .idle_timeout(Duration::from_secs(30))
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in &statements {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect(url)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))?;

    info!(
        engine = "postgres",
        min = pool_cfg.pool_min,
        max = pool_cfg.pool_max,
        acquire_timeout_ms = pool_cfg.acquire_timeout_ms,
        "pool=create"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(sqlx_pool))
}

/// Build the application pool with per-connection session settings.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    pool_cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, db_kind, DbOwner::App)?;
    match db_kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => build_sqlite_pool(&url, db_kind, pool_cfg).await,
        DbKind::Postgres => build_postgres_pool(&url, pool_cfg).await,
    }
}

/// Build a single-connection pool with owner credentials, used for migrations.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    if db_kind == DbKind::Postgres {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        AppError::config(format!("failed to connect to Postgres (admin pool): {e}"))
                    })
                }
            },
            5,
            500,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to database (admin pool): {e}")))
    }
}

async fn run_migrations(conn: &DatabaseConnection) -> Result<(), AppError> {
    migrate(conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))
}

/// Build the app DB *and* guarantee the schema is current.
///
/// In-memory SQLite migrates on the returned pool itself, since every
/// connection is a separate database. Other kinds migrate through a
/// short-lived owner pool before the app pool is opened.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    validate_db_config(env, db_kind)?;
    info!(env = ?env, db_kind = db_kind.as_str(), "bootstrap=start");

    let pool_cfg = ConnectionSettings::for_kind(env, db_kind);
    let conn = match db_kind {
        DbKind::SqliteMemory => {
            let conn = build_pool(env, db_kind, &pool_cfg).await?;
            run_migrations(&conn).await?;
            conn
        }
        DbKind::SqliteFile | DbKind::Postgres => {
            let admin = build_admin_pool(env, db_kind).await?;
            run_migrations(&admin).await?;
            if let Err(e) = admin.close().await {
                warn!(error = %e, "failed to close admin pool");
            }
            build_pool(env, db_kind, &pool_cfg).await?
        }
    };

    info!("bootstrap=ready");
    Ok(conn)
}
