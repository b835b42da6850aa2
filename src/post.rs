use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::author::Author;
use crate::error::Result;
use crate::time::Timestamp;

/// A single post (status) from search results.
///
/// `is_retweet` is derived: it is true whenever the raw payload carried a
/// `retweeted_status` key, whatever its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweet_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Author>,
    #[serde(default)]
    pub is_retweet: bool,
}

impl Post {
    /// Map a raw status object
    pub fn from_raw(payload: &Value) -> Result<Self> {
        let mut post = Post::deserialize(payload)?;
        post.is_retweet = payload.get("retweeted_status").is_some();
        Ok(post)
    }
}
