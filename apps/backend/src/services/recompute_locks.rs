//! Per tournament-week serialization of scorecard writes and recomputation.

use std::sync::Arc;

use dashmap::DashMap;
use time::Date;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

/// Identity of one recompute job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekKey {
    pub tournament_id: i64,
    pub week_start_date: Date,
}

impl WeekKey {
    pub fn new(tournament_id: i64, week_start_date: Date) -> Self {
        Self {
            tournament_id,
            week_start_date,
        }
    }
}

/// One async mutex per tournament-week. Holders of the guard are the only
/// writers of that week's scorecards, matches and leaderboard.
#[derive(Debug, Default)]
pub struct RecomputeLocks {
    locks: DashMap<WeekKey, Arc<Mutex<()>>>,
}

impl RecomputeLocks {
    pub async fn acquire(&self, key: WeekKey) -> OwnedMutexGuard<()> {
        // The map shard guard must be released before awaiting the mutex.
        let lock = {
            let entry = self.locks.entry(key).or_default();
            Arc::clone(entry.value())
        };
        let guard = lock.lock_owned().await;
        trace!(
            tournament_id = key.tournament_id,
            week_start = %key.week_start_date,
            "recompute lock acquired"
        );
        guard
    }

    pub fn tracked_weeks(&self) -> usize {
        self.locks.len()
    }
}
