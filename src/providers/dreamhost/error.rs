use crate::providers::dreamhost::types::DreamhostError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DreamhostProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limited")]
    RateLimited { retry_after: Option<Duration> },
}

impl From<DreamhostError> for DreamhostProviderError {
    fn from(err: DreamhostError) -> Self {
        let message = err.message();
        match err.data.as_str() {
            "no_record" | "no_such_record" | "no_such_zone" => {
                DreamhostProviderError::NotFound(message)
            }
            "no_key" | "invalid_api_key" | "key_has_no_permissions" => {
                DreamhostProviderError::Credential(message)
            }
            "slow_down_bucko" | "rate_limit_exceeded" => {
                DreamhostProviderError::RateLimited { retry_after: None }
            }
            "no_record_specified"
            | "no_type_specified"
            | "no_value_specified"
            | "invalid_record"
            | "invalid_type"
            | "invalid_value"
            | "record_already_exists_not_editable"
            | "record_already_exists_remove_first"
            | "CNAME_must_be_only_record"
            | "CNAME_already_on_record" => DreamhostProviderError::InvalidInput(message),
            _ => DreamhostProviderError::Provider(message),
        }
    }
}

use crate::error::Error;

pub fn map_error(e: DreamhostProviderError) -> Error {
    use DreamhostProviderError::*;
    match e {
        Http(err) => Error::ProviderError(err.to_string()),
        Json(err) => Error::ProviderError(err.to_string()),
        Credential(msg) => Error::CredentialError(msg),
        NotFound(msg) => Error::NotFound(msg),
        InvalidInput(msg) => Error::InvalidInput(msg),
        Provider(msg) => Error::ProviderError(msg),
        RateLimited { retry_after } => Error::RateLimited { retry_after },
    }
}
