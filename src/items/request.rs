//! Request building for item operations.
//!
//! [`ItemRequest`] turns an operation, a collection, and the optional
//! identity, projection, filter and body into an [`HttpRequest`]. It is a
//! pure transformation; nothing is sent.
//!
//! Query parameters are added in a fixed order, `fields` before `filter`,
//! and only when non-empty. The filter is the API's own filter language,
//! already encoded by the caller, and is passed through verbatim.

use crate::clients::HttpRequest;
use crate::items::errors::ItemError;
use crate::items::path::{collection_path, item_path, ItemOperation};
use crate::items::resource::{CollectionItem, Resource, SingletonItem};

/// Builder for the HTTP request of one item operation.
///
/// # Example
///
/// ```rust
/// use directus_api::items::{ItemOperation, ItemRequest};
///
/// let request = ItemRequest::new(ItemOperation::Find, "articles")
///     .fields("id,title")
///     .filter(r#"{"status":{"_eq":"published"}}"#)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "items/articles");
/// assert_eq!(request.query_value("fields"), Some("id,title"));
/// ```
#[derive(Debug, Clone)]
pub struct ItemRequest<'a> {
    operation: ItemOperation,
    collection: &'a str,
    id: Option<String>,
    fields: &'a str,
    filter: Option<&'a str>,
    body: Option<Vec<u8>>,
}

impl<'a> ItemRequest<'a> {
    /// Starts a request for `operation` on `collection`.
    #[must_use]
    pub const fn new(operation: ItemOperation, collection: &'a str) -> Self {
        Self {
            operation,
            collection,
            id: None,
            fields: "",
            filter: None,
            body: None,
        }
    }

    /// Sets the identity segment; ignored by operations without one.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the field projection.
    #[must_use]
    pub const fn fields(mut self, fields: &'a str) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub const fn filter(mut self, filter: &'a str) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the raw JSON body.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::MissingId`] if the operation targets a single
    /// item and no non-empty identity was given, and an invalid request
    /// error if a write has no body.
    pub fn build(self) -> Result<HttpRequest, ItemError> {
        let path = if self.operation.targets_single_item() {
            let id = self
                .id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ItemError::MissingId {
                    collection: self.collection.to_string(),
                    operation: self.operation.as_str(),
                })?;
            item_path(self.collection, &id)
        } else {
            collection_path(self.collection)
        };

        let mut builder = HttpRequest::builder(self.operation.http_method(), path);
        if !self.fields.is_empty() {
            builder = builder.query_param("fields", self.fields);
        }
        if let Some(filter) = self.filter.filter(|f| !f.is_empty()) {
            builder = builder.query_param("filter", filter);
        }
        if let Some(body) = self.body {
            builder = builder.json_body(body);
        }

        Ok(builder.build()?)
    }
}

fn missing_id<T: Resource>(item: &T, operation: ItemOperation) -> ItemError {
    ItemError::MissingId {
        collection: item.collection_name().to_string(),
        operation: operation.as_str(),
    }
}

/// Builds the request reading `item` by its identity.
///
/// # Errors
///
/// Returns [`ItemError::MissingId`] if the item does not exist remotely.
pub fn get_request<T: CollectionItem>(item: &T) -> Result<HttpRequest, ItemError> {
    let id = item
        .identity()
        .ok_or_else(|| missing_id(item, ItemOperation::Get))?;
    ItemRequest::new(ItemOperation::Get, item.collection_name())
        .id(id.to_string())
        .fields(item.field_projection())
        .build()
}

/// Builds the request querying `item`'s collection with `filter`.
///
/// # Errors
///
/// Returns an error only if the request fails validation.
pub fn find_request<T: Resource>(item: &T, filter: &str) -> Result<HttpRequest, ItemError> {
    ItemRequest::new(ItemOperation::Find, item.collection_name())
        .fields(item.field_projection())
        .filter(filter)
        .build()
}

/// Builds the request creating `item`.
///
/// # Errors
///
/// Returns [`ItemError::Encode`] if the item cannot be serialized.
pub fn create_request<T: CollectionItem>(item: &T) -> Result<HttpRequest, ItemError> {
    ItemRequest::new(ItemOperation::Create, item.collection_name())
        .fields(item.field_projection())
        .body(item.serialize_item()?)
        .build()
}

/// Builds the request updating `item` in place.
///
/// # Errors
///
/// Returns [`ItemError::MissingId`] if the item does not exist remotely and
/// [`ItemError::Encode`] if it cannot be serialized.
pub fn update_request<T: CollectionItem>(item: &T) -> Result<HttpRequest, ItemError> {
    let id = item
        .identity()
        .ok_or_else(|| missing_id(item, ItemOperation::Update))?;
    ItemRequest::new(ItemOperation::Update, item.collection_name())
        .id(id.to_string())
        .fields(item.field_projection())
        .body(item.serialize_item()?)
        .build()
}

/// Builds the request reading a singleton.
///
/// # Errors
///
/// Returns an error only if the request fails validation.
pub fn get_singleton_request<T: SingletonItem>(item: &T) -> Result<HttpRequest, ItemError> {
    ItemRequest::new(ItemOperation::GetSingleton, item.collection_name())
        .fields(item.field_projection())
        .build()
}

/// Builds the request updating a singleton.
///
/// # Errors
///
/// Returns [`ItemError::Encode`] if the singleton cannot be serialized.
pub fn update_singleton_request<T: SingletonItem>(item: &T) -> Result<HttpRequest, ItemError> {
    ItemRequest::new(ItemOperation::UpdateSingleton, item.collection_name())
        .fields(item.field_projection())
        .body(item.serialize_item()?)
        .build()
}
