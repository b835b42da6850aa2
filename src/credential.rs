use base64::{engine::general_purpose::STANDARD, Engine};
use url::form_urlencoded;

use crate::error::{RestError, Result};

/// Environment variable holding the consumer key
pub const ENV_CONSUMER_KEY: &str = "TWITREST_CONSUMER_KEY";
/// Environment variable holding the consumer secret
pub const ENV_CONSUMER_SECRET: &str = "TWITREST_CONSUMER_SECRET";

/// Basic-Auth credential for the client-credentials grant:
/// `base64(urlencode(key) ":" urlencode(secret))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Encode a consumer key/secret pair
    pub fn encode(key: &str, secret: &str) -> Self {
        let joined = format!("{}:{}", urlencode(key), urlencode(secret));
        Credential(STANDARD.encode(joined))
    }

    /// Read the consumer key/secret pair from the environment
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(ENV_CONSUMER_KEY)
            .map_err(|_| RestError::Other(format!("{} is not set", ENV_CONSUMER_KEY)))?;
        let secret = std::env::var(ENV_CONSUMER_SECRET)
            .map_err(|_| RestError::Other(format!("{} is not set", ENV_CONSUMER_SECRET)))?;
        Ok(Credential::encode(&key, &secret))
    }

    /// The encoded credential, as sent after `Basic `
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reverse the base64 step, returning the urlencoded key and secret
    pub fn decode(&self) -> Result<(String, String)> {
        let bytes = STANDARD.decode(&self.0)?;
        let joined = String::from_utf8(bytes)
            .map_err(|e| RestError::Other(format!("credential is not UTF-8: {}", e)))?;

        // urlencoded parts never contain a raw colon
        let (key, secret) = joined
            .split_once(':')
            .ok_or_else(|| RestError::Other("credential has no separator".to_string()))?;

        Ok((key.to_string(), secret.to_string()))
    }

    /// Value for the `Authorization` header of the token request
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

/// Form-urlencode a single value (space becomes `+`)
pub(crate) fn urlencode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
