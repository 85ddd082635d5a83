use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::credentials::{CredentialManager, DREAMHOST_API_KEY};
use crate::config::Config;
use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::providers::dreamhost::error::DreamhostProviderError;
use crate::providers::dreamhost::types::*;

pub struct DreamhostConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub min_request_delay: Duration,
}

impl From<&Config> for DreamhostConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout: config.timeout,
            min_request_delay: config.min_request_delay,
        }
    }
}

pub struct DreamhostProvider {
    config: DreamhostConfig,
    client: Client,
    api_key: String,
    rate_limiter: RateLimiter,
}

#[derive(Clone)]
struct RateLimiter {
    last_request: Arc<Mutex<Option<Instant>>>,
    min_delay: Duration,
}

impl RateLimiter {
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

impl DreamhostProvider {
    pub fn new(
        config: DreamhostConfig,
        credentials: Arc<dyn CredentialManager>,
    ) -> Result<Self, DreamhostProviderError> {
        let api_key = credentials
            .get(DREAMHOST_API_KEY)
            .map_err(|e| DreamhostProviderError::Credential(e.to_string()))?;

        let client = Client::builder().timeout(config.timeout).build()?;

        let rate_limiter = RateLimiter {
            last_request: Arc::new(Mutex::new(None)),
            min_delay: config.min_request_delay,
        };

        Ok(Self {
            config,
            client,
            api_key,
            rate_limiter,
        })
    }

    /// Issues one API command and unwraps the response envelope.
    async fn command<T>(
        &self,
        cmd: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, DreamhostProviderError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.wait().await;
        debug!(cmd, "Calling DreamHost API");

        // The API refuses a repeated unique_id, so every call gets a fresh one.
        let unique_id = format!("{:032x}", rand::random::<u128>());
        let response = self
            .client
            .get(format!("{}/", self.config.api_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("cmd", cmd),
                ("format", "json"),
                ("unique_id", unique_id.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: ApiResponse<serde_json::Value> = response.json().await?;
                if body.result == "success" {
                    return Ok(serde_json::from_value(body.data)?);
                }
                let error = DreamhostError {
                    data: match body.data {
                        serde_json::Value::String(code) => code,
                        other => other.to_string(),
                    },
                    reason: body.reason,
                };
                warn!(cmd, error = %error.message(), "DreamHost API returned an error");
                Err(error.into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                // No waiting here: the cache lock is held across this call.
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                warn!(cmd, ?retry_after, "DreamHost API rate limited the request");
                Err(DreamhostProviderError::RateLimited { retry_after })
            }
            status => {
                let error: DreamhostError = response.json().await.unwrap_or(DreamhostError {
                    data: format!("http_{}", status.as_u16()),
                    reason: status.canonical_reason().map(str::to_string),
                });
                Err(error.into())
            }
        }
    }

    pub async fn list_dns_records(&self) -> Result<Vec<DNSRecord>, DreamhostProviderError> {
        let records: Vec<DreamhostRecord> = self.command(CMD_LIST_RECORDS, &[]).await?;
        Ok(records
            .into_iter()
            .filter_map(|dr| {
                let record = dr.record.clone();
                DNSRecord::try_from(dr)
                    .inspect_err(|e| debug!(%record, error = %e, "Skipping record"))
                    .ok()
            })
            .collect())
    }

    pub async fn add_dns_record(&self, input: &DNSRecordInput) -> Result<(), DreamhostProviderError> {
        let _: String = self
            .command(CMD_ADD_RECORD, &record_params(input, true))
            .await?;
        Ok(())
    }

    pub async fn remove_dns_record(
        &self,
        input: &DNSRecordInput,
    ) -> Result<(), DreamhostProviderError> {
        let _: String = self
            .command(CMD_REMOVE_RECORD, &record_params(input, false))
            .await?;
        Ok(())
    }
}
