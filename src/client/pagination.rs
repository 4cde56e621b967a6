//! Pagination envelope for API responses
//!
//! Every listing endpoint returns its records under a per-endpoint
//! collection key together with an optional continuation token. The
//! token appears as `token` on most endpoints and `paginationToken` on
//! some; a missing or null token signals the end of the result set.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Keys under which the continuation token may appear
const TOKEN_KEYS: [&str; 2] = ["token", "paginationToken"];

/// One page of a token-paginated result set
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records in this page
    pub data: Vec<T>,

    /// Continuation token; `None` when this is the last page
    pub token: Option<String>,
}

impl<T> Page<T> {
    /// A single page with no continuation
    pub fn last(data: Vec<T>) -> Self {
        Self { data, token: None }
    }

    /// Whether another page should be fetched after this one
    pub fn has_next(&self) -> bool {
        self.token.is_some()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Parse a page from a raw response body.
    ///
    /// `collection` names the key the endpoint stores its records under
    /// (e.g. `agents`, `alerts`, `servers`). A response without that key
    /// is malformed.
    pub fn from_body(body: Value, collection: &str) -> Result<Self> {
        let Value::Object(mut map) = body else {
            return Err(ApiError::InvalidResponse(
                "expected a JSON object response".to_string(),
            )
            .into());
        };

        let token = TOKEN_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(Value::as_str)
            .map(str::to_string);

        let records = map.remove(collection).ok_or_else(|| {
            ApiError::InvalidResponse(format!("expected '{}' key in response", collection))
        })?;

        let data: Vec<T> = serde_json::from_value(records).map_err(|e| {
            ApiError::InvalidResponse(format!("failed to parse '{}' records: {}", collection, e))
        })?;

        Ok(Self { data, token })
    }
}
