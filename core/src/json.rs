//! Response body deserialization.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Deserialize the whole body as `T`.
pub fn parse_body<T: DeserializeOwned>(raw: &str) -> ApiResult<T> {
    serde_json::from_str(raw).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Deserialize the value stored under the top-level `key` as `T`.
///
/// Used for reqres envelopes such as `{"page": 1, "data": [...]}`.
pub fn parse_at<T: DeserializeOwned>(raw: &str, key: &str) -> ApiResult<T> {
    let mut root: Value = parse_body(raw)?;
    let object = root
        .as_object_mut()
        .ok_or_else(|| ApiError::Deserialization(format!("expected a JSON object around `{key}`")))?;
    let value = object
        .remove(key)
        .ok_or_else(|| ApiError::Deserialization(format!("missing field `{key}`")))?;
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(format!("`{key}`: {e}")))
}
