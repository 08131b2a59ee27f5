use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::recompute_locks::RecomputeLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Per tournament-week recompute serialization
    recompute_locks: Arc<RecomputeLocks>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            recompute_locks: Arc::new(RecomputeLocks::default()),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self {
            db: None,
            recompute_locks: Arc::new(RecomputeLocks::default()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn recompute_locks(&self) -> &RecomputeLocks {
        &self.recompute_locks
    }
}
