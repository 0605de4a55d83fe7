//! HTTP client types for Directus API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Directus API. It attaches headers, classifies responses
//! and retries transient failures.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//! - [`MultipartForm`]: A replayable multipart body for file uploads
//!
//! # Retry Behavior
//!
//! - **500 (Server Error)**: Replayed immediately, with no delay, up to the
//!   retry budget (5 by default, so at most 6 attempts)
//! - **Any other status >= 300**: Returned immediately, body verbatim
//! - **Transport failures**: Returned immediately

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod multipart;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRYABLE_STATUS, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
pub use multipart::{MultipartForm, MultipartPart};
