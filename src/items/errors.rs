//! Error types for item operations.
//!
//! [`ItemError`] extends the transport-level [`HttpError`] with the
//! failures that belong to the resource layer: precondition violations,
//! envelope and decode failures, and upload source errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use directus_api::items::ItemError;
//!
//! match client.update(&article).await {
//!     Ok(saved) => println!("Saved {:?}", saved.id),
//!     Err(ItemError::MissingId { collection, .. }) => {
//!         println!("{} item has not been created yet", collection);
//!     }
//!     Err(ItemError::Http(e)) => println!("Request failed: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::error::ConfigError;

/// Error type for item operations.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The operation needs a remote identity but the item has none.
    ///
    /// Raised before any request is sent.
    #[error("Cannot {operation} {collection} item without an id")]
    MissingId {
        /// The collection the item belongs to.
        collection: String,
        /// The operation being attempted (e.g. "get", "update").
        operation: &'static str,
    },

    /// The response body is not a `{"data": ...}` envelope.
    #[error("Malformed response envelope: {reason}")]
    MalformedEnvelope {
        /// Why the envelope was rejected.
        reason: String,
    },

    /// The envelope payload does not decode into the target type.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The item could not be serialized into a request body.
    #[error("Failed to encode item: {0}")]
    Encode(#[source] serde_json::Error),

    /// The upload source could not be read.
    #[error("Failed to read upload source: {0}")]
    Upload(#[from] std::io::Error),

    /// The client could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for ItemError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl ItemError {
    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
