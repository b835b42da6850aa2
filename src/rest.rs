use crate::author::AuthorProfile;
use crate::client::{create_rest_client, Config};
use crate::credential::{urlencode, Credential};
use crate::error::{RestError, Result};
use crate::post::Post;
use crate::response::SearchPage;
use crate::token::TokenProvider;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, instrument};
use url::Url;

/// Page size requested when the caller sets no cap
pub const DEFAULT_PAGE_SIZE: i64 = 100;

const COUNT_NOT_INTEGER: &str = "Count parameter must be an integer";
const COUNT_NOT_POSITIVE: &str = "Count parameter must be a positive integer";
const USER_ID_NOT_INTEGER: &str = "User id must be an integer";
const USER_ID_NOT_POSITIVE: &str = "User id must be a positive integer";

/// Progress callback, receives one line of text per call
pub type ProgressFn = Box<dyn Fn(&str) + Send + Sync>;

/// Client for the search and user lookup endpoints.
///
/// Every request fetches a fresh bearer token first. Operations take
/// `&mut self` because the token provider records the last token.
pub struct RestClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: Config,
    /// OAuth2 client-credentials token source
    oauth: TokenProvider,
    /// Optional progress sink
    progress: Option<ProgressFn>,
}

impl RestClient {
    /// Create a client for the default API with the given consumer key/secret
    pub fn new(key: &str, secret: &str) -> Result<Self> {
        Self::with_config(Config::default(), Credential::encode(key, secret))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: Config, credential: Credential) -> Result<Self> {
        let client = create_rest_client(config.timeout)?;
        let oauth = TokenProvider::new(client.clone(), config.oauth_url.clone(), credential);

        Ok(RestClient {
            client,
            config,
            oauth,
            progress: None,
        })
    }

    /// Create a client from `TWITREST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env(), Credential::from_env()?)
    }

    /// Replace the token provider, e.g. to change the token path or body
    pub fn with_token_provider(mut self, oauth: TokenProvider) -> Self {
        self.oauth = oauth;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token_provider(&self) -> &TokenProvider {
        &self.oauth
    }

    /// Send progress lines to `progress`
    pub fn bind(&mut self, progress: ProgressFn) {
        self.progress = Some(progress);
    }

    /// Stop reporting progress
    pub fn unbind(&mut self) {
        self.progress = None;
    }

    fn line(&self, line: &str) {
        if let Some(ref progress) = self.progress {
            progress(line);
        }
    }

    /// Search for posts matching `term`.
    ///
    /// Pages are fetched until the API stops returning `next_results` or, when
    /// `max_results` is set, until at least that many posts were gathered.
    /// The cap is only checked between pages so the result can exceed it by
    /// up to one page.
    #[instrument(skip(self))]
    pub fn search(&mut self, term: &str, max_results: Option<i64>) -> Result<Vec<Post>> {
        if let Some(count) = max_results {
            ensure_positive(count, COUNT_NOT_POSITIVE)?;
        }

        let mut path = format!("{}?q={}", self.config.search_path, urlencode(term));
        path.push_str(&format!("&count={}", max_results.unwrap_or(DEFAULT_PAGE_SIZE)));

        let mut posts = Vec::new();
        self.line("Starting fetch");

        loop {
            let data = self.authenticated_request(&path)?;
            let page: SearchPage = serde_json::from_value(data)?;

            for status in &page.statuses {
                posts.push(Post::from_raw(status)?);
            }

            self.line(&format!("{} Gathered", posts.len()));
            debug!(page_size = page.statuses.len(), total = posts.len(), "search page mapped");

            let below_cap = max_results.map_or(true, |cap| (posts.len() as i64) < cap);
            match page.search_metadata.next_results {
                Some(next) if below_cap => {
                    path = format!("{}{}", self.config.search_path, next);
                }
                _ => break,
            }
        }

        Ok(posts)
    }

    /// Same as [`RestClient::search`] for a cap that arrives untyped, such
    /// as a command line argument. `null` means no cap.
    pub fn search_value(&mut self, term: &str, max_results: &Value) -> Result<Vec<Post>> {
        let max_results = match max_results {
            Value::Null => None,
            value => Some(integer_param(value).ok_or_else(|| {
                RestError::Validation(COUNT_NOT_INTEGER.to_string())
            })?),
        };
        self.search(term, max_results)
    }

    /// Look up the profile of a single user
    #[instrument(skip(self))]
    pub fn lookup(&mut self, id: i64) -> Result<AuthorProfile> {
        ensure_positive(id, USER_ID_NOT_POSITIVE)?;

        let path = format!("{}?user_id={}", self.config.lookup_path, id);
        let data = self.authenticated_request(&path)?;
        AuthorProfile::from_raw(&data)
    }

    /// Same as [`RestClient::lookup`] for an untyped user id
    pub fn lookup_value(&mut self, id: &Value) -> Result<AuthorProfile> {
        let id = integer_param(id)
            .ok_or_else(|| RestError::Validation(USER_ID_NOT_INTEGER.to_string()))?;
        self.lookup(id)
    }

    /// GET `path` on the API host with a freshly fetched bearer token
    fn authenticated_request(&mut self, path: &str) -> Result<Value> {
        let token = self.oauth.fetch_bearer_token()?;
        let url = Url::parse(&self.config.api_endpoint(path))?;

        let start = Instant::now();
        let http_response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token.header_value())
            .send()?;
        let status = http_response.status();
        let body = http_response.bytes()?;

        debug!(path, %status, elapsed = ?start.elapsed(), "GET");

        if status != StatusCode::OK {
            return Err(RestError::Request {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).to_string(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Accept integer JSON numbers and integer strings
fn integer_param(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn ensure_positive(value: i64, message: &str) -> Result<i64> {
    if value < 1 {
        return Err(RestError::Validation(message.to_string()));
    }
    Ok(value)
}
