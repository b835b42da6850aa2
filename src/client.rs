use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Base URL of the REST API
pub const DEFAULT_API_URL: &str = "https://api.twitter.com";
/// Search endpoint, relative to the API base URL
pub const SEARCH_PATH: &str = "/1.1/search/tweets.json";
/// User lookup endpoint, relative to the API base URL
pub const LOOKUP_PATH: &str = "/1.1/users/show.json";

/// Environment variable overriding [`Config::api_url`]
pub const ENV_API_URL: &str = "TWITREST_API_URL";
/// Environment variable overriding [`Config::oauth_url`]
pub const ENV_OAUTH_URL: &str = "TWITREST_OAUTH_URL";

const USER_AGENT: &str = concat!("twitrest/", env!("CARGO_PKG_VERSION"));

/// Create the HTTP client used for both token and API requests.
///
/// Without a timeout the transport defaults apply.
pub fn create_rest_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .user_agent(USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Configuration for REST API client
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL (scheme and host, no trailing slash)
    pub api_url: String,
    /// Base URL the OAuth token request is sent to
    pub oauth_url: String,
    /// Search endpoint path
    pub search_path: String,
    /// User lookup endpoint path
    pub lookup_path: String,
    /// Whole-request timeout
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_API_URL.to_string(),
            search_path: SEARCH_PATH.to_string(),
            lookup_path: LOOKUP_PATH.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Create a configuration where both the API and the OAuth endpoint
    /// live under `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = trim_base(base_url.into());
        Config {
            api_url: base_url.clone(),
            oauth_url: base_url,
            ..Config::default()
        }
    }

    /// Default configuration with base URLs taken from the environment
    /// when set
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api_url = trim_base(url);
            config.oauth_url = config.api_url.clone();
        }
        if let Ok(url) = std::env::var(ENV_OAUTH_URL) {
            config.oauth_url = trim_base(url);
        }
        config
    }

    /// Send the token request somewhere other than the API host
    pub fn with_oauth_url(mut self, oauth_url: impl Into<String>) -> Self {
        self.oauth_url = trim_base(oauth_url.into());
        self
    }

    /// Set a whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL for a path relative to the API base
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
