//! HTTP request types for the Directus API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Directus API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::multipart::MultipartForm;

/// HTTP methods used by the Directus API client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads, finds and raw paths.
    Get,
    /// HTTP POST method for creating items and uploading files.
    Post,
    /// HTTP PATCH method for updating items and singletons.
    Patch,
}

impl HttpMethod {
    /// Returns whether requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// Raw JSON bytes, sent unwrapped.
    Json(Vec<u8>),
    /// A multipart form; the transport sets its own boundary content type.
    Multipart(MultipartForm),
}

/// An HTTP request to be sent to the Directus API.
///
/// # Example
///
/// ```rust
/// use directus_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "items/articles")
///     .query_param("fields", "id,title")
///     .query_param("filter", r#"{"status":{"_eq":"published"}}"#)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query[0], ("fields".to_string(), "id,title".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters, encoded in insertion order.
    pub query: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Bearer token for this request only, overriding the client's token.
    pub bearer_token: Option<String>,
    /// Retry budget for status 500; `None` uses the client's default.
    pub max_retries: Option<u32>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Patch` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the value of a query parameter, if present.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the caller already set a `Content-Type` header.
    #[must_use]
    pub fn has_content_type(&self) -> bool {
        self.extra_headers.as_ref().is_some_and(|headers| {
            headers
                .keys()
                .any(|k| k.eq_ignore_ascii_case("content-type"))
        })
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    extra_headers: Option<HashMap<String, String>>,
    bearer_token: Option<String>,
    max_retries: Option<u32>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            extra_headers: None,
            bearer_token: None,
            max_retries: None,
        }
    }

    /// Sets a raw JSON request body.
    #[must_use]
    pub fn json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Sets a multipart request body.
    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a single query parameter after any already present.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Uses `token` as the bearer token for this request only.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Sets how many times a status 500 response is retried for this request.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            extra_headers: self.extra_headers,
            bearer_token: self.bearer_token,
            max_retries: self.max_retries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "items/articles")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "items/articles");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert!(request.max_retries.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_patch() {
        assert!(matches!(
            HttpRequest::builder(HttpMethod::Post, "items/articles").build(),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
        assert!(matches!(
            HttpRequest::builder(HttpMethod::Patch, "items/articles/1").build(),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "items/articles")
            .query_param("fields", "id")
            .query_param("filter", "{}")
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["fields", "filter"]);
        assert_eq!(request.query_value("filter"), Some("{}"));
        assert_eq!(request.query_value("limit"), None);
    }

    #[test]
    fn test_has_content_type_is_case_insensitive() {
        let request = HttpRequest::builder(HttpMethod::Get, "files")
            .header("content-type", "text/plain")
            .build()
            .unwrap();
        assert!(request.has_content_type());

        let request = HttpRequest::builder(HttpMethod::Get, "files").build().unwrap();
        assert!(!request.has_content_type());
    }

    #[test]
    fn test_bearer_token_and_retry_overrides() {
        let request = HttpRequest::builder(HttpMethod::Get, "users/me")
            .bearer_token("other-token")
            .max_retries(0)
            .build()
            .unwrap();

        assert_eq!(request.bearer_token.as_deref(), Some("other-token"));
        assert_eq!(request.max_retries, Some(0));
    }
}
