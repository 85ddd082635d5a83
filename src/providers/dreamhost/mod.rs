//! DreamHost provider implementation

pub mod client;
pub mod error;
pub mod types;

pub use client::{DreamhostConfig, DreamhostProvider};
pub use error::DreamhostProviderError;

use crate::core::provider::DNSProvider;
use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;

#[async_trait]
impl DNSProvider for DreamhostProvider {
    fn name(&self) -> &str {
        "dreamhost"
    }

    async fn list_records(&self) -> Result<Vec<DNSRecord>, Error> {
        self.list_dns_records().await.map_err(map_error)
    }

    async fn add_record(&self, record: &DNSRecordInput) -> Result<(), Error> {
        self.add_dns_record(record).await.map_err(map_error)
    }

    async fn remove_record(&self, record: &DNSRecordInput) -> Result<(), Error> {
        self.remove_dns_record(record).await.map_err(map_error)
    }
}
