use crate::error::Error;
use std::collections::HashMap;
use std::env;

pub const DREAMHOST_API_KEY: &str = "dreamhost_api_key";
const DREAMHOST_API_KEY_ENV: &str = "DREAMHOST_API_KEY";

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Reads credentials from the process environment.
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let var = match key {
            DREAMHOST_API_KEY => DREAMHOST_API_KEY_ENV,
            _ => return Err(Error::CredentialError(format!("Unknown key: {key}"))),
        };
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(Error::CredentialError(format!(
                "Missing DreamHost API key: {var} is not set"
            ))),
        }
    }
}

/// Credentials supplied up front, e.g. from the tool's provider block.
pub struct StaticCredentialManager {
    values: HashMap<String, String>,
}

impl StaticCredentialManager {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(HashMap::from([(DREAMHOST_API_KEY.to_string(), api_key.into())]))
    }
}

impl CredentialManager for StaticCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        self.values
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| Error::CredentialError(format!("Missing credential: {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_static_credentials() {
        let creds = StaticCredentialManager::with_api_key("6SHU5P2HLDAYECUM");
        assert_eq!(creds.get(DREAMHOST_API_KEY).unwrap(), "6SHU5P2HLDAYECUM");
        assert_matches!(creds.get("other"), Err(Error::CredentialError(_)));
    }

    #[test]
    fn test_empty_static_key_is_missing() {
        let creds = StaticCredentialManager::with_api_key("");
        assert_matches!(creds.get(DREAMHOST_API_KEY), Err(Error::CredentialError(_)));
    }

    #[test]
    fn test_env_unknown_key() {
        assert_matches!(
            EnvCredentialManager.get("api_secret"),
            Err(Error::CredentialError(_))
        );
    }
}
