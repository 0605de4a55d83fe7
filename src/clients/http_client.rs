//! HTTP client for Directus API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Directus API with bounded retry handling.

use std::collections::HashMap;

use reqwest::Url;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, BaseUrl, DirectusConfig};
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The only status code treated as transient.
pub const RETRYABLE_STATUS: u16 = 500;

/// HTTP client for making requests to the Directus API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - The `Authorization: Bearer` header, always overwritten
/// - A default `Content-Type: application/json` for non-multipart requests
/// - Immediate retries, without delay, for status 500 responses
///
/// Any other status of 300 or above is terminal and surfaces the response
/// body verbatim. Redirects are not followed.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. It holds only immutable configuration, so
/// concurrent requests never share a retry budget.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is resolved against.
    base_url: BaseUrl,
    /// Bearer token sent unless a request overrides it.
    access_token: AccessToken,
    /// Retry budget for requests that do not set their own.
    max_retries: u32,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying transport
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(config: &DirectusConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Directus API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        tracing::debug!(base_url = %config.base_url(), "Created Directus HTTP client");

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            access_token: config.access_token().clone(),
            max_retries: config.max_retries(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default retry budget for this client.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a request, query string included.
    #[must_use]
    pub fn build_url(&self, request: &HttpRequest) -> Url {
        let mut url = self.base_url.join_path(&request.path);
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Computes the headers sent with a request.
    fn build_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        headers.retain(|key, _| !key.eq_ignore_ascii_case("authorization"));
        let token = request
            .bearer_token
            .as_deref()
            .unwrap_or_else(|| self.access_token.as_ref());
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));

        let is_multipart = matches!(request.body, Some(RequestBody::Multipart(_)));
        if !is_multipart && !request.has_content_type() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        headers
    }

    /// Sends an HTTP request to the Directus API.
    ///
    /// Status 500 responses are replayed immediately, up to the request's
    /// retry budget (or the client default), for at most `max_retries + 1`
    /// attempts in total.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The exchange cannot be completed (`Network`)
    /// - A status of 300 or above other than 500 is received (`Response`)
    /// - Status 500 persists past the retry budget (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.build_url(&request);
        let headers = self.build_headers(&request);
        let max_retries = request.max_retries.unwrap_or(self.max_retries);

        let mut retries: u32 = 0;
        loop {
            let response = self.send(&request, &url, &headers).await?;

            if response.is_ok() {
                return Ok(response);
            }

            if response.code == RETRYABLE_STATUS {
                if retries >= max_retries {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code: response.code,
                        tries: retries + 1,
                    }));
                }
                retries += 1;
                tracing::debug!(
                    path = %request.path,
                    retry = retries,
                    max_retries,
                    "Directus API returned 500, retrying"
                );
                continue;
            }

            tracing::debug!(
                path = %request.path,
                status = response.code,
                "Directus API returned an error response"
            );
            return Err(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.body_text(),
            }));
        }
    }

    /// Performs a single exchange.
    async fn send(
        &self,
        request: &HttpRequest,
        url: &Url,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };

        let mut req_builder = self.client.request(method, url.clone());
        for (key, value) in headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        match &request.body {
            Some(RequestBody::Json(bytes)) => req_builder = req_builder.body(bytes.clone()),
            Some(RequestBody::Multipart(form)) => req_builder = req_builder.multipart(form.to_form()?),
            None => {}
        }

        let res = req_builder.send().await.map_err(|e| {
            tracing::warn!(
                path = %request.path,
                error = %e,
                "Error sending request to Directus API"
            );
            e
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
