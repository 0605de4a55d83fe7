//! # Directus API Rust Client
//!
//! A Rust client for the Directus REST API: typed access to collection
//! items and singletons, file uploads, users and roles.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DirectusConfig`] and [`DirectusConfigBuilder`]
//! - Validated newtypes for the base URL and access token
//! - Resource traits ([`Resource`], [`CollectionItem`], [`SingletonItem`])
//!   that turn any serde struct into a remote item
//! - [`DirectusClient`] with get, find, create, update and upsert verbs
//! - The `{"data": ...}` response envelope codec in [`items::envelope`]
//! - An async HTTP client that retries internal server errors
//! - Fixed-format [`Date`] and [`DateTime`] field codecs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use directus_api::{CollectionItem, DirectusClient, ItemMeta, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! struct Article {
//!     #[serde(flatten)]
//!     meta: ItemMeta,
//!     title: String,
//! }
//!
//! impl Resource for Article {
//!     const COLLECTION: &'static str = "articles";
//! }
//!
//! impl CollectionItem for Article {
//!     type Id = u64;
//!
//!     fn id(&self) -> Option<u64> {
//!         self.meta.id
//!     }
//!
//!     fn set_id(&mut self, id: u64) {
//!         self.meta.id = Some(id);
//!     }
//! }
//!
//! let client = DirectusClient::new("https://cms.example.com", "static-token")?;
//!
//! let article = client
//!     .upsert(&Article { title: "Hello".into(), ..Default::default() })
//!     .await?;
//! assert!(article.exists());
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use directus_api::{AccessToken, BaseUrl, DirectusConfig};
//!
//! let config = DirectusConfig::builder()
//!     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
//!     .access_token(AccessToken::new("static-token"))
//!     .max_retries(3)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 3);
//! ```
//!
//! ## Retries
//!
//! Only HTTP 500 responses are retried, immediately, up to `max_retries`
//! extra attempts (default 5). Every other status of 300 or above is
//! returned at once as [`HttpError::Response`] carrying the response body.
//!
//! ## Design Principles
//!
//! - **No global state**: every client carries its own configuration
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime

mod client;
pub mod clients;
pub mod config;
pub mod dates;
pub mod error;
pub mod items;
pub mod schemas;

pub use client::{get_item, DirectusClient, FILE_CONTENT_TYPE_PDF};

pub use config::{AccessToken, BaseUrl, DirectusConfig, DirectusConfigBuilder, DEFAULT_MAX_RETRIES};
pub use error::ConfigError;

pub use dates::{Date, DateTime};

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, MultipartForm,
    RequestBody,
};

pub use items::{CollectionItem, Identity, ItemError, ItemMeta, Resource, SingletonItem};

pub use schemas::{File, Role, User};
