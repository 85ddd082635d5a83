//! Single-snapshot record cache with fill-once semantics.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::core::record::DNSRecord;

pub type Snapshot = Arc<[DNSRecord]>;

#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Absent,
    Populated(Snapshot),
}

/// Holds at most one snapshot of the remote record list.
///
/// The lock is held across the presence check and the fetch, so concurrent
/// callers never trigger a second fetch and never see a partial snapshot.
#[derive(Debug, Default)]
pub struct RecordCache {
    state: Mutex<CacheState>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot, calling `fetch` only if none is held.
    ///
    /// A failed fetch leaves the cache empty; the next call fetches again.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<Snapshot, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<DNSRecord>, E>>,
    {
        let mut state = self.state.lock().await;
        if let CacheState::Populated(records) = &*state {
            debug!(records = records.len(), "Serving records from cache");
            return Ok(records.clone());
        }

        let records: Snapshot = fetch().await?.into();
        debug!(records = records.len(), "Filled record cache");
        *state = CacheState::Populated(records.clone());
        Ok(records)
    }

    /// Fetches unconditionally and replaces the snapshot wholesale.
    ///
    /// On failure the cache is reset to empty rather than left holding the
    /// previous snapshot.
    pub async fn refresh<F, Fut, E>(&self, fetch: F) -> Result<Snapshot, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<DNSRecord>, E>>,
    {
        let mut state = self.state.lock().await;
        match fetch().await {
            Ok(records) => {
                let records: Snapshot = records.into();
                debug!(records = records.len(), "Replaced record cache");
                *state = CacheState::Populated(records.clone());
                Ok(records)
            }
            Err(e) => {
                *state = CacheState::Absent;
                Err(e)
            }
        }
    }

    pub async fn invalidate(&self) {
        *self.state.lock().await = CacheState::Absent;
    }

    /// Current snapshot, if any, without fetching.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        match &*self.state.lock().await {
            CacheState::Populated(records) => Some(records.clone()),
            CacheState::Absent => None,
        }
    }
}
