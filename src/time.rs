use chrono::{DateTime, ParseError, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Format used by the API for `created_at` fields,
/// e.g. `Wed Aug 27 13:08:45 +0000 2008`
pub const API_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Timestamp wrapping chrono::DateTime, serialized in the API's own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Parse an API timestamp, falling back to RFC 3339
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        DateTime::parse_from_str(value, API_TIME_FORMAT)
            .or_else(|e| DateTime::parse_from_rfc3339(value).map_err(|_| e))
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Format in the API's own format
    pub fn to_api_string(&self) -> String {
        self.0.format(API_TIME_FORMAT).to_string()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_api_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_api_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}
