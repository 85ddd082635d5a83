use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::error::Error;
use async_trait::async_trait;

/// Remote record store. Implementations perform the actual network calls
/// and do no caching of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn list_records(&self) -> Result<Vec<DNSRecord>, Error>;
    async fn add_record(&self, record: &DNSRecordInput) -> Result<(), Error>;
    async fn remove_record(&self, record: &DNSRecordInput) -> Result<(), Error>;
}
