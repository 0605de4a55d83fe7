//! Path building for Directus endpoints.
//!
//! Collection items live under `items/{collection}` and
//! `items/{collection}/{id}`; singletons share the collection path.
//! Path segments are percent-encoded, so string identities containing
//! reserved characters stay a single segment.
//!
//! # Example
//!
//! ```rust
//! use directus_api::items::{collection_path, item_path};
//!
//! assert_eq!(collection_path("articles"), "items/articles");
//! assert_eq!(item_path("articles", &42), "items/articles/42");
//! assert_eq!(item_path("tags", &"a/b"), "items/tags/a%2Fb");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// Path of the file upload endpoint.
pub const FILES_PATH: &str = "files";

/// Path of the current user endpoint.
pub const CURRENT_USER_PATH: &str = "users/me";

/// Operations that can be performed on an item resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemOperation {
    /// Read one collection item (GET /items/{collection}/{id}).
    Get,
    /// Query a collection (GET /items/{collection}).
    Find,
    /// Create a collection item (POST /items/{collection}).
    Create,
    /// Update a collection item (PATCH /items/{collection}/{id}).
    Update,
    /// Read a singleton (GET /items/{collection}).
    GetSingleton,
    /// Update a singleton (PATCH /items/{collection}).
    UpdateSingleton,
}

impl ItemOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Get | Self::Find | Self::GetSingleton => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update | Self::UpdateSingleton => HttpMethod::Patch,
        }
    }

    /// Returns whether the path carries an identity segment.
    #[must_use]
    pub const fn targets_single_item(&self) -> bool {
        matches!(self, Self::Get | Self::Update)
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::GetSingleton => "get singleton",
            Self::UpdateSingleton => "update singleton",
        }
    }
}

/// Returns the path of a whole collection or a singleton.
#[must_use]
pub fn collection_path(collection: &str) -> String {
    format!("items/{}", urlencoding::encode(collection))
}

/// Returns the path of a single collection item.
#[must_use]
pub fn item_path(collection: &str, id: &impl Display) -> String {
    format!(
        "items/{}/{}",
        urlencoding::encode(collection),
        urlencoding::encode(&id.to_string())
    )
}

/// Returns the path of a role.
#[must_use]
pub fn role_path(id: &str) -> String {
    format!("roles/{}", urlencoding::encode(id))
}
