use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::time::Timestamp;

/// Author of a post, as embedded in search results.
///
/// Only the fields below are read from the raw payload; everything else is
/// dropped. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_background_color: Option<String>,
}

impl Author {
    /// Map a raw user object
    pub fn from_raw(payload: &Value) -> Result<Self> {
        Ok(Author::deserialize(payload)?)
    }
}

/// Result of a user lookup. Only the profile image is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl AuthorProfile {
    /// Map a raw user lookup response
    pub fn from_raw(payload: &Value) -> Result<Self> {
        Ok(AuthorProfile::deserialize(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_author_copies_allowed_fields() {
        let raw = json!({
            "id": 6253282,
            "name": "Twitter API",
            "screen_name": "TwitterAPI",
            "location": "San Francisco, CA",
            "description": "The Real Twitter API.",
            "url": "https://dev.twitter.com",
            "followers_count": 6133636,
            "friends_count": 12,
            "statuses_count": 3656,
            "created_at": "Wed May 23 06:01:13 +0000 2007",
            "profile_background_color": "C0DEED",
            "unused_field": "x",
            "entities": {"url": {"urls": []}}
        });

        let author = Author::from_raw(&raw).unwrap();
        assert_eq!(author.id, Some(6253282));
        assert_eq!(author.name.as_deref(), Some("Twitter API"));
        assert_eq!(author.screen_name.as_deref(), Some("TwitterAPI"));
        assert_eq!(author.location.as_deref(), Some("San Francisco, CA"));
        assert_eq!(author.description.as_deref(), Some("The Real Twitter API."));
        assert_eq!(author.url.as_deref(), Some("https://dev.twitter.com"));
        assert_eq!(author.followers_count, Some(6133636));
        assert_eq!(author.friends_count, Some(12));
        assert_eq!(author.statuses_count, Some(3656));
        assert_eq!(
            author.created_at.map(|t| t.to_api_string()).as_deref(),
            Some("Wed May 23 06:01:13 +0000 2007")
        );
        assert_eq!(author.profile_background_color.as_deref(), Some("C0DEED"));

        // re-serializing shows only allow-listed keys survived
        let back = serde_json::to_value(&author).unwrap();
        assert!(back.get("unused_field").is_none());
        assert!(back.get("entities").is_none());
        assert_eq!(back.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_author_missing_fields_are_unset() {
        let author = Author::from_raw(&json!({"screen_name": "jack"})).unwrap();
        assert_eq!(author.screen_name.as_deref(), Some("jack"));
        assert_eq!(
            author,
            Author {
                screen_name: Some("jack".to_string()),
                ..Author::default()
            }
        );
    }

    #[test]
    fn test_author_bad_timestamp_is_fatal() {
        let result = Author::from_raw(&json!({"created_at": "not a date"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_keeps_only_image() {
        let raw = json!({
            "id": 12,
            "screen_name": "jack",
            "profile_image_url": "http://pbs.twimg.com/profile_images/1/a_normal.jpg",
            "profile_image_url_https": "https://pbs.twimg.com/profile_images/1/a_normal.jpg"
        });

        let profile = AuthorProfile::from_raw(&raw).unwrap();
        assert_eq!(
            profile.profile_image_url.as_deref(),
            Some("http://pbs.twimg.com/profile_images/1/a_normal.jpg")
        );
        assert_eq!(serde_json::to_value(&profile).unwrap().as_object().unwrap().len(), 1);
    }
}
