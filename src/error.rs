//! Error types for client configuration.
//!
//! This module contains the error type returned while building a
//! [`DirectusConfig`](crate::DirectusConfig) or constructing a client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use directus_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("cms.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed or is not an http(s) URL with a host.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://cms.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP transport could not be initialized.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// Description of the transport failure.
        reason: String,
    },
}
