use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of search results.
///
/// Statuses are kept raw here and mapped into posts by the caller, so an
/// envelope with a missing `statuses` or `search_metadata` key fails to
/// parse while individual statuses are validated one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Raw status objects
    pub statuses: Vec<Value>,

    /// Pagination metadata
    pub search_metadata: SearchMetadata,
}

/// `search_metadata` block of a search response. Only the cursor is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// Query string for the next page, starting with `?`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_results: Option<String>,
}
