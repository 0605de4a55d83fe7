//! Resource traits describing remote Directus items.
//!
//! Any struct that should be read or written through
//! [`DirectusClient`](crate::DirectusClient) implements [`Resource`] plus
//! exactly one of the two capabilities:
//!
//! - [`CollectionItem`]: has an identity and lives at `/items/{collection}/{id}`
//! - [`SingletonItem`]: has no identity and lives at `/items/{collection}`
//!
//! # Implementing a Resource
//!
//! ```rust
//! use directus_api::items::{CollectionItem, ItemMeta, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Article {
//!     #[serde(flatten)]
//!     pub meta: ItemMeta,
//!     pub title: String,
//! }
//!
//! impl Resource for Article {
//!     const COLLECTION: &'static str = "articles";
//!     const FIELDS: &'static str = "id,title,date_created";
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
//! let article = Article::default();
//! assert!(!article.exists());
//! ```

use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::items::envelope;
use crate::items::errors::ItemError;

/// A value that can act as a remote Directus resource.
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The path segment identifying the remote collection (e.g. "articles").
    const COLLECTION: &'static str;

    /// Comma-joined fields to request; empty requests the API default set.
    const FIELDS: &'static str = "";

    /// Returns the collection name used in request paths.
    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    /// Returns the field projection for requests made with this value.
    fn field_projection(&self) -> &str {
        Self::FIELDS
    }

    /// Serializes this value into a raw JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Encode`] if serialization fails.
    fn serialize_item(&self) -> Result<Vec<u8>, ItemError> {
        envelope::wrap(self)
    }

    /// Decodes an unwrapped payload into a new value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Decode`] on a shape mismatch.
    fn deserialize_item(data: &[u8]) -> Result<Self, ItemError> {
        envelope::decode(data)
    }

    /// Decodes a payload onto this value.
    ///
    /// The value is encoded with [`serialize_item`](Self::serialize_item),
    /// the payload's top-level keys replace the encoded ones, and the result
    /// is decoded with [`deserialize_item`](Self::deserialize_item). Keys
    /// absent from the payload keep this value's data.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Encode`] or [`ItemError::Decode`] if either hook
    /// fails.
    fn merge_item(&self, data: &[u8]) -> Result<Self, ItemError> {
        let merged = envelope::merge(&self.serialize_item()?, data)?;
        Self::deserialize_item(&merged)
    }
}

/// An identity value of a collection item.
///
/// Integers equal to zero and empty strings count as unset.
pub trait Identity:
    Clone + Debug + Display + PartialEq + Serialize + DeserializeOwned + Send + Sync
{
    /// Returns whether this value means "not created yet".
    fn is_unset(&self) -> bool;
}

impl Identity for u64 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Identity for i64 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Identity for u32 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Identity for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

/// A resource with many remote instances, each addressed by an identity.
pub trait CollectionItem: Resource {
    /// The type of the item's identity.
    type Id: Identity;

    /// Returns the stored identity, set or not.
    fn id(&self) -> Option<Self::Id>;

    /// Assigns the identity, e.g. after a successful create.
    fn set_id(&mut self, id: Self::Id);

    /// Returns the identity only if it refers to an existing remote item.
    fn identity(&self) -> Option<Self::Id> {
        self.id().filter(|id| !id.is_unset())
    }

    /// Returns whether the item already exists remotely.
    fn exists(&self) -> bool {
        self.identity().is_some()
    }
}

/// A resource with exactly one remote instance and no identity.
pub trait SingletonItem: Resource {}

/// Fields every Directus collection item may carry.
///
/// Flatten it into a resource struct with `#[serde(flatten)]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta<Id = u64> {
    /// The item's identity; absent until created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// When the item was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the item was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
}
