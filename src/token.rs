use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::credential::Credential;
use crate::error::{ResponseInfo, RestError, Result};

/// Default path of the token endpoint
pub const DEFAULT_TOKEN_PATH: &str = "/oauth2/token";
/// Default body of the token request
pub const DEFAULT_TOKEN_BODY: &str = "grant_type=client_credentials";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Opaque bearer token returned by the OAuth endpoint. Carries no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        BearerToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header of API requests
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// Body of a successful token response
#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: BearerToken,
    #[serde(default)]
    token_type: Option<String>,
}

/// Obtains bearer tokens through the OAuth2 client-credentials grant.
///
/// Every call to [`TokenProvider::fetch_bearer_token`] performs a new POST;
/// the last token is kept only for inspection.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    client: Client,
    oauth_url: String,
    path: String,
    body: String,
    credential: Credential,
    token: Option<BearerToken>,
    last_response: Option<ResponseInfo>,
}

impl TokenProvider {
    /// Create a provider posting to `oauth_url` + [`DEFAULT_TOKEN_PATH`]
    pub fn new(client: Client, oauth_url: impl Into<String>, credential: Credential) -> Self {
        TokenProvider {
            client,
            oauth_url: oauth_url.into(),
            path: DEFAULT_TOKEN_PATH.to_string(),
            body: DEFAULT_TOKEN_BODY.to_string(),
            credential,
            token: None,
            last_response: None,
        }
    }

    /// Override the token endpoint path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the token request body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The encoded Basic-Auth credential
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The token obtained by the last successful request
    pub fn cached_token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    /// Metadata of the last token response, successful or not
    pub fn last_response(&self) -> Option<&ResponseInfo> {
        self.last_response.as_ref()
    }

    /// Full URL of the token endpoint
    pub fn token_url(&self) -> String {
        format!("{}{}", self.oauth_url, self.path)
    }

    /// Request a new bearer token
    #[instrument(skip(self), fields(url = %self.token_url()))]
    pub fn fetch_bearer_token(&mut self) -> Result<BearerToken> {
        let url = url::Url::parse(&self.token_url())?;

        let http_response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.credential.header_value())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(self.body.clone())
            .send()?;

        let status = http_response.status();
        let final_url = http_response.url().to_string();
        let content_type = http_response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = http_response.text()?;

        debug!(%status, "token response received");

        let info = ResponseInfo {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        };
        self.last_response = Some(info.clone());

        if status != StatusCode::OK {
            return Err(RestError::auth(info));
        }

        let parsed: TokenResponse = serde_json::from_str(&info.body)?;
        if let Some(ref token_type) = parsed.token_type {
            debug!(token_type = %token_type, "bearer token issued");
        }

        self.token = Some(parsed.access_token.clone());
        Ok(parsed.access_token)
    }
}
