//! HTTP-specific error types for the Directus API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A terminal non-2xx response (anything but 500)
//! - [`MaxHttpRetriesExceededError`]: Status 500 persisted past the retry budget
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use directus_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} attempts", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a terminal non-successful response.
///
/// The message is the verbatim response body text. It is not guaranteed to
/// be plain text; Directus usually answers with a JSON `errors` document.
///
/// # Example
///
/// ```rust
/// use directus_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "not found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, verbatim.
    pub message: String,
}

/// Error returned when status 500 persisted across every allowed attempt.
///
/// The body of the last 500 response is discarded.
#[derive(Debug, Error)]
#[error("Internal server error: maximum of {tries} attempts reached")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of attempts that were made.
    pub tries: u32,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body is required for this method.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart part declared a content type that is not a valid MIME type.
    #[error("Invalid content type '{content_type}' for multipart part '{part}'.")]
    InvalidContentType {
        /// The name of the offending part.
        part: String,
        /// The rejected content type.
        content_type: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A terminal HTTP response error (status >= 300 and not 500).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Status 500 persisted across the retry budget.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The exchange could not be completed (DNS, connection, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) => None,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message_is_verbatim_body() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":[{"message":"Route doesn't exist"}]}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"{"errors":[{"message":"Route doesn't exist"}]}"#
        );
    }

    #[test]
    fn test_max_retries_error_includes_attempt_count() {
        let error = MaxHttpRetriesExceededError { code: 500, tries: 6 };
        let message = error.to_string();
        assert!(message.contains('6'));
        assert!(message.contains("maximum"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use patch without specifying data."
        );
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error = HttpError::from(HttpResponseError {
            code: 403,
            message: "forbidden".to_string(),
        });
        assert_eq!(error.status(), Some(403));

        let error = HttpError::from(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
        };
        let _ = response_error;

        let max_retries_error: &dyn std::error::Error =
            &MaxHttpRetriesExceededError { code: 500, tries: 3 };
        let _ = max_retries_error;
    }
}
