//! Create/read/delete/import lifecycle for a single DNS record resource.

use std::sync::Arc;

use tracing::{info, warn};

use crate::core::cached_client::CachedClient;
use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::error::Error;

/// What the infrastructure tool keeps in state for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    pub id: String,
    pub record: DNSRecord,
}

impl ResourceState {
    fn new(input: &DNSRecordInput, record: DNSRecord) -> Self {
        Self {
            id: input.to_id(),
            record,
        }
    }
}

pub struct DNSRecordResource {
    client: Arc<CachedClient>,
}

impl DNSRecordResource {
    pub fn new(client: Arc<CachedClient>) -> Self {
        Self { client }
    }

    /// Adds the record, then reads it back with a fresh list to pick up the
    /// provider-computed fields.
    pub async fn create(&self, input: &DNSRecordInput) -> Result<ResourceState, Error> {
        self.client.add(input).await?;
        match self.client.lookup(input, false).await? {
            Some(record) => {
                info!(id = %input.to_id(), "Created record");
                Ok(ResourceState::new(input, record))
            }
            None => {
                warn!(id = %input.to_id(), "Record not visible after create");
                Err(Error::NotFound(input.to_id()))
            }
        }
    }

    /// `Ok(None)` means the record no longer exists remotely.
    pub async fn read(&self, id: &str) -> Result<Option<ResourceState>, Error> {
        let input = DNSRecordInput::from_id(id)?;
        Ok(self
            .client
            .lookup(&input, true)
            .await?
            .map(|record| ResourceState::new(&input, record)))
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let input = DNSRecordInput::from_id(id)?;
        self.client.remove(&input).await?;
        self.client.invalidate().await;
        info!(id, "Deleted record");
        Ok(())
    }

    pub async fn import(&self, id: &str) -> Result<ResourceState, Error> {
        let input = DNSRecordInput::from_id(id)?;
        self.client
            .lookup(&input, false)
            .await?
            .map(|record| ResourceState::new(&input, record))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::MockDNSProvider;
    use crate::core::record::tests::record;
    use crate::core::record::DNSRecordType;
    use assert_matches::assert_matches;
    use std::sync::Mutex;
    use tokio_test::assert_ok;

    fn resource(mock: MockDNSProvider) -> DNSRecordResource {
        DNSRecordResource::new(Arc::new(CachedClient::new(Arc::new(mock))))
    }

    #[tokio::test]
    async fn test_create_reads_back_computed_fields() {
        let mut mock = MockDNSProvider::new();
        mock.expect_add_record().times(1).returning(|_| Ok(()));
        mock.expect_list_records().times(1).returning(|| {
            let mut rec = record("api", DNSRecordType::CNAME, "target.example.com.");
            rec.comment = "managed".into();
            Ok(vec![rec])
        });

        let input = DNSRecordInput::new("api", DNSRecordType::CNAME, "target.example.com");
        let state = resource(mock).create(&input).await.unwrap();
        assert_eq!(state.id, "CNAME|api|target.example.com");
        assert_eq!(state.record.value, "target.example.com.");
        assert_eq!(state.record.comment, "managed");
    }

    #[tokio::test]
    async fn test_create_not_visible() {
        let mut mock = MockDNSProvider::new();
        mock.expect_add_record().returning(|_| Ok(()));
        mock.expect_list_records().returning(|| Ok(vec![]));

        let input = DNSRecordInput::new("www", DNSRecordType::A, "1.2.3.4");
        assert_matches!(resource(mock).create(&input).await, Err(Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_add_failure_skips_lookup() {
        let mut mock = MockDNSProvider::new();
        mock.expect_add_record()
            .returning(|_| Err(Error::InvalidInput("CNAME_already_on_record".into())));
        mock.expect_list_records().never();

        let input = DNSRecordInput::new("www", DNSRecordType::CNAME, "example.com");
        assert_matches!(resource(mock).create(&input).await, Err(Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_reads_share_one_fetch() {
        let mut mock = MockDNSProvider::new();
        mock.expect_list_records().times(1).returning(|| {
            Ok(vec![
                record("www", DNSRecordType::A, "1.2.3.4"),
                record("mail", DNSRecordType::MX, "10 mx.example.com."),
            ])
        });
        let resource = resource(mock);

        let www = resource.read("A|www|1.2.3.4").await.unwrap().unwrap();
        assert_eq!(www.record.record, "www");
        let mx = resource.read("MX|mail|10 mx.example.com").await.unwrap();
        assert!(mx.is_some());
        let gone = resource.read("A|old|9.9.9.9").await.unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn test_read_invalid_id() {
        let mut mock = MockDNSProvider::new();
        mock.expect_list_records().never();
        assert_matches!(resource(mock).read("garbage").await, Err(Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_delete_invalidates_cache() {
        let remote = Arc::new(Mutex::new(vec![record("www", DNSRecordType::A, "1.2.3.4")]));

        let mut mock = MockDNSProvider::new();
        let listed = remote.clone();
        mock.expect_list_records()
            .times(2)
            .returning(move || Ok(listed.lock().unwrap().clone()));
        let removed = remote.clone();
        mock.expect_remove_record()
            .times(1)
            .returning(move |input| {
                removed.lock().unwrap().retain(|r| !r.matches(input));
                Ok(())
            });
        let resource = resource(mock);

        assert!(resource.read("A|www|1.2.3.4").await.unwrap().is_some());
        assert_ok!(resource.delete("A|www|1.2.3.4").await);
        assert!(resource.read("A|www|1.2.3.4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_import() {
        let mut mock = MockDNSProvider::new();
        mock.expect_list_records()
            .times(2)
            .returning(|| Ok(vec![record("www", DNSRecordType::A, "1.2.3.4")]));
        let resource = resource(mock);

        let state = resource.import("A|www|1.2.3.4").await.unwrap();
        assert_eq!(state.id, "A|www|1.2.3.4");
        assert_matches!(resource.import("A|www|4.3.2.1").await, Err(Error::NotFound(_)));
    }
}
