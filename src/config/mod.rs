//! Configuration types for the Directus API client.
//!
//! This module provides the configuration types used to construct a
//! [`DirectusClient`](crate::DirectusClient).
//!
//! # Overview
//!
//! - [`DirectusConfig`]: The configuration struct holding all client settings
//! - [`DirectusConfigBuilder`]: A builder for constructing [`DirectusConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`AccessToken`]: A validated static bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use directus_api::{AccessToken, BaseUrl, DirectusConfig};
//! use std::time::Duration;
//!
//! let config = DirectusConfig::builder()
//!     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
//!     .access_token(AccessToken::new("static-token"))
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Number of times a request answered with status 500 is replayed.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Configuration for the Directus API client.
///
/// # Thread Safety
///
/// `DirectusConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct DirectusConfig {
    base_url: BaseUrl,
    access_token: AccessToken,
    max_retries: u32,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DirectusConfig {
    /// Creates a new builder for constructing a `DirectusConfig`.
    #[must_use]
    pub fn builder() -> DirectusConfigBuilder {
        DirectusConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the static access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns how many times a request answered with status 500 is retried.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DirectusConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DirectusConfig>();
};

/// Builder for constructing [`DirectusConfig`] instances.
///
/// Required fields are `base_url` and `access_token`.
///
/// # Defaults
///
/// - `max_retries`: [`DEFAULT_MAX_RETRIES`]
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DirectusConfigBuilder {
    base_url: Option<BaseUrl>,
    access_token: Option<AccessToken>,
    max_retries: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DirectusConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the static access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets how many times a request answered with status 500 is retried.
    ///
    /// A value of `n` allows up to `n + 1` attempts in total.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DirectusConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<DirectusConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(DirectusConfig {
            base_url,
            access_token,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
