//! Generic resource access for Directus items.
//!
//! This module holds everything between a typed resource value and the
//! transport:
//!
//! - **[`Resource`]**, **[`CollectionItem`]**, **[`SingletonItem`]**: the
//!   capability traits a resource type implements
//! - **[`ItemRequest`]** and the `*_request` helpers: pure request building
//! - **[`envelope`]**: the `{"data": ...}` response envelope codec
//! - **[`ItemError`]**: errors for item operations
//!
//! The verbs themselves (`get`, `find`, `create`, ...) live on
//! [`DirectusClient`](crate::DirectusClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use directus_api::DirectusClient;
//!
//! let client = DirectusClient::new("https://cms.example.com", "static-token")?;
//!
//! let mut article = Article::default();
//! article.title = "Hello".to_string();
//!
//! // POST /items/articles, then PATCH /items/articles/{id}
//! let mut article = client.upsert(&article).await?;
//! article.title = "Hello again".to_string();
//! let article = client.upsert(&article).await?;
//!
//! // First match or the prototype unchanged
//! let found = client
//!     .find(&Article::default(), r#"{"title":{"_eq":"Hello again"}}"#)
//!     .await?;
//! ```

pub mod envelope;
mod errors;
mod path;
mod request;
mod resource;

pub use errors::ItemError;
pub use path::{collection_path, item_path, role_path, ItemOperation, CURRENT_USER_PATH, FILES_PATH};
pub use request::{
    create_request, find_request, get_request, get_singleton_request, update_request,
    update_singleton_request, ItemRequest,
};
pub use resource::{CollectionItem, Identity, ItemMeta, Resource, SingletonItem};
