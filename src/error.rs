use std::time::Duration;
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `retry_after` is the server's hint; nothing at this layer waits on it.
    #[error("Rate limited")]
    RateLimited { retry_after: Option<Duration> },

    /// The cache fill on a cached read failed.
    #[error("failed to list records: {0}")]
    ListRecords(#[source] Box<Error>),

    /// An explicit list or forced refresh failed.
    #[error("failed to refresh cache: {0}")]
    RefreshCache(#[source] Box<Error>),
}

impl Error {
    /// The remote error underneath any cache wrapping.
    pub fn root(&self) -> &Error {
        match self {
            Error::ListRecords(inner) | Error::RefreshCache(inner) => inner.root(),
            other => other,
        }
    }
}
