//! Caching client serving record reads from a shared snapshot.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::cache::{RecordCache, Snapshot};
use crate::core::provider::DNSProvider;
use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::error::Error;

/// Read-through cache in front of a [`DNSProvider`].
///
/// Mutations go straight to the provider and leave the cache untouched.
/// Reads are served from one shared snapshot that is fetched at most once
/// unless a refresh is requested. Construct one per tool run and share it
/// behind an `Arc`.
pub struct CachedClient {
    provider: Arc<dyn DNSProvider>,
    cache: RecordCache,
}

impl CachedClient {
    pub fn new(provider: Arc<dyn DNSProvider>) -> Self {
        Self {
            provider,
            cache: RecordCache::new(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub async fn add(&self, input: &DNSRecordInput) -> Result<(), Error> {
        info!(record = %input.record, record_type = %input.record_type, "Adding record");
        self.provider.add_record(input).await
    }

    pub async fn remove(&self, input: &DNSRecordInput) -> Result<(), Error> {
        info!(record = %input.record, record_type = %input.record_type, "Removing record");
        self.provider.remove_record(input).await
    }

    /// Fetches the full record list and replaces the cached snapshot.
    pub async fn list(&self) -> Result<Vec<DNSRecord>, Error> {
        self.refresh().await.map(|records| records.to_vec())
    }

    /// Finds the record addressed by `input`.
    ///
    /// With `use_cache` the cached snapshot is used, filling it first if
    /// needed. Without it the snapshot is refreshed once and the lookup is
    /// served from that fresh snapshot. A missing record is `Ok(None)`.
    pub async fn lookup(
        &self,
        input: &DNSRecordInput,
        use_cache: bool,
    ) -> Result<Option<DNSRecord>, Error> {
        let records = if use_cache {
            self.cache
                .get_or_fetch(|| self.provider.list_records())
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to fill record cache");
                    Error::ListRecords(Box::new(e))
                })?
        } else {
            self.refresh().await?
        };

        let found = records.iter().find(|r| r.matches(input)).cloned();
        if found.is_none() {
            debug!(record = %input.record, record_type = %input.record_type, "Record not found");
        }
        Ok(found)
    }

    /// Drops the snapshot so the next cached read fetches again.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    async fn refresh(&self) -> Result<Snapshot, Error> {
        let records = self
            .cache
            .refresh(|| self.provider.list_records())
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to refresh record cache");
                Error::RefreshCache(Box::new(e))
            })?;
        info!(records = records.len(), "Refreshed record cache");
        Ok(records)
    }
}
