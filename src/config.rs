use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.dreamhost.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub min_request_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_url: env::var("DREAMHOST_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(
                env::var("DREAMHOST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
            min_request_delay: Duration::from_millis(
                env::var("DREAMHOST_MIN_REQUEST_DELAY_MS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .unwrap_or(500),
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                api_url: String::from("http://127.0.0.1:0"),
                timeout: Duration::from_secs(5),
                min_request_delay: Duration::ZERO,
            }
        }
    }
}
