//! The `{"data": ...}` response envelope.
//!
//! Every successful Directus response wraps its payload in a `data` key.
//! Request bodies are sent raw. The envelope is parsed structurally, so key
//! order, whitespace and sibling keys such as `meta` do not matter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::items::errors::ItemError;

#[derive(Deserialize)]
struct Envelope<'a> {
    #[serde(borrow)]
    data: &'a RawValue,
}

/// Serializes a payload into a raw JSON request body.
///
/// No envelope is added; the API expects unwrapped bodies on writes.
///
/// # Errors
///
/// Returns [`ItemError::Encode`] if the payload cannot be serialized.
pub fn wrap<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, ItemError> {
    serde_json::to_vec(payload).map_err(ItemError::Encode)
}

/// Extracts the `data` payload bytes from a response body.
///
/// The returned bytes are exactly the payload as it appeared on the wire.
///
/// # Errors
///
/// Returns [`ItemError::MalformedEnvelope`] if the body is not a JSON object
/// or has no `data` key.
///
/// # Example
///
/// ```rust
/// use directus_api::items::envelope;
///
/// let data = envelope::unwrap(br#"{"data":{"id":1}}"#).unwrap();
/// assert_eq!(data, br#"{"id":1}"#);
/// ```
pub fn unwrap(body: &[u8]) -> Result<Vec<u8>, ItemError> {
    let envelope: Envelope<'_> =
        serde_json::from_slice(body).map_err(|e| ItemError::MalformedEnvelope {
            reason: e.to_string(),
        })?;
    Ok(envelope.data.get().as_bytes().to_vec())
}

/// Decodes payload bytes into a fresh value.
///
/// # Errors
///
/// Returns [`ItemError::Decode`] on a shape mismatch.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, ItemError> {
    serde_json::from_slice(data).map_err(ItemError::Decode)
}

/// Merges a payload onto an encoded document.
///
/// When both are objects, top-level keys present in `patch` replace those
/// in `base` and keys absent from `patch` are kept. Otherwise `patch` wins.
///
/// # Errors
///
/// Returns [`ItemError::Encode`] if `base` is not valid JSON and
/// [`ItemError::Decode`] if `patch` is not.
///
/// # Example
///
/// ```rust
/// use directus_api::items::envelope;
///
/// let merged = envelope::merge(br#"{"id":1,"title":"a"}"#, br#"{"title":"b"}"#).unwrap();
/// assert_eq!(merged, br#"{"id":1,"title":"b"}"#);
/// ```
pub fn merge(base: &[u8], patch: &[u8]) -> Result<Vec<u8>, ItemError> {
    let base: Value = serde_json::from_slice(base).map_err(ItemError::Encode)?;
    let patch: Value = decode(patch)?;

    let merged = match (base, patch) {
        (Value::Object(mut base_map), Value::Object(patch_map)) => {
            base_map.extend(patch_map);
            Value::Object(base_map)
        }
        (_, patch) => patch,
    };

    serde_json::to_vec(&merged).map_err(ItemError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Article {
        id: Option<u64>,
        title: String,
        #[serde(default)]
        body: String,
    }

    #[test]
    fn test_unwrap_returns_exact_payload_bytes() {
        let payload = r#"{ "id": 7,  "title": "Hello" }"#;
        let body = format!(r#"{{"data":{payload}}}"#);

        let data = unwrap(body.as_bytes()).unwrap();
        assert_eq!(data, payload.as_bytes());
    }

    #[test]
    fn test_unwrap_ignores_key_order_and_siblings() {
        let body = br#"{ "meta": {"total_count": 2},
            "data": [1, 2] }"#;
        assert_eq!(unwrap(body).unwrap(), b"[1, 2]");
    }

    #[test]
    fn test_unwrap_accepts_null_payload() {
        assert_eq!(unwrap(br#"{"data":null}"#).unwrap(), b"null");
    }

    #[test]
    fn test_unwrap_rejects_missing_data_key() {
        let result = unwrap(br#"{"errors":[{"message":"nope"}]}"#);
        assert!(matches!(result, Err(ItemError::MalformedEnvelope { .. })));
    }

    #[test]
    fn test_unwrap_rejects_non_envelope_bodies() {
        assert!(matches!(
            unwrap(b"[1,2,3]"),
            Err(ItemError::MalformedEnvelope { .. })
        ));
        assert!(matches!(
            unwrap(b""),
            Err(ItemError::MalformedEnvelope { .. })
        ));
        assert!(matches!(
            unwrap(br#"{"data":"#),
            Err(ItemError::MalformedEnvelope { .. })
        ));
    }

    #[test]
    fn test_wrap_adds_no_envelope() {
        let article = Article {
            id: None,
            title: "Hi".to_string(),
            body: String::new(),
        };
        let bytes = wrap(&article).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["title"], "Hi");
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let result: Result<Article, _> = decode(br#"{"title": 12}"#);
        assert!(matches!(result, Err(ItemError::Decode(_))));
    }

    #[test]
    fn test_merge_keeps_absent_keys() {
        let current = Article {
            id: None,
            title: "Draft".to_string(),
            body: "Body text".to_string(),
        };

        let base = wrap(&current).unwrap();
        let merged = merge(&base, br#"{"id": 42, "title": "Published"}"#).unwrap();
        let merged: Article = decode(&merged).unwrap();
        assert_eq!(merged.id, Some(42));
        assert_eq!(merged.title, "Published");
        assert_eq!(merged.body, "Body text");
    }

    #[test]
    fn test_merge_with_non_object_patch_replaces_base() {
        assert_eq!(merge(br#"{"a":1}"#, b"[1]").unwrap(), b"[1]");
        assert!(matches!(
            merge(br#"{"a":1}"#, b"{"),
            Err(ItemError::Decode(_))
        ));
    }
}
