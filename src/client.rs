//! The Directus API client.
//!
//! [`DirectusClient`] exposes one method per operation. Each method builds
//! a request, sends it through [`HttpClient`] (retrying status 500), strips
//! the response envelope and decodes the payload.
//!
//! Reads and writes decode the response onto the value that was passed in:
//! keys present in the response replace the caller's values, keys absent
//! from it (e.g. outside the field projection) are kept.

use serde::Deserialize;
use serde_json::value::RawValue;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::clients::{HttpClient, HttpMethod, HttpRequest, MultipartForm};
use crate::config::{AccessToken, BaseUrl, DirectusConfig};
use crate::error::ConfigError;
use crate::items::{
    self, envelope, CollectionItem, Identity, ItemError, ItemOperation, ItemRequest, Resource,
    SingletonItem,
};
use crate::schemas::{File, Role, User};

/// Content type for PDF uploads.
pub const FILE_CONTENT_TYPE_PDF: &str = "application/pdf";

#[derive(Deserialize)]
struct IdOnly<Id> {
    id: Option<Id>,
}

/// Client for the Directus REST API.
///
/// # Thread Safety
///
/// `DirectusClient` is `Send + Sync` and holds only immutable configuration,
/// so one instance can be shared across tasks for the process lifetime.
///
/// # Example
///
/// ```rust,ignore
/// use directus_api::DirectusClient;
///
/// let client = DirectusClient::new("https://cms.example.com", "static-token")?;
///
/// let article = client.get(&Article::with_id(42)).await?;
/// let settings = client.get_singleton(&Settings::default()).await?;
/// let me = client.get_current_user("user-token").await?;
/// ```
#[derive(Debug)]
pub struct DirectusClient {
    http_client: HttpClient,
}

// Verify DirectusClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DirectusClient>();
};

impl DirectusClient {
    /// Creates a client for `base_url` authenticating with a static token.
    ///
    /// All other settings use the [`DirectusConfig`] defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` is malformed.
    /// An empty token is accepted and authenticates as the public role.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self, ConfigError> {
        let config = DirectusConfig::builder()
            .base_url(BaseUrl::new(base_url)?)
            .access_token(AccessToken::new(access_token))
            .build()?;
        Self::from_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the transport cannot be
    /// initialized.
    pub fn from_config(config: &DirectusConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a request and returns the unwrapped `data` payload.
    async fn fetch_data(&self, request: HttpRequest) -> Result<Vec<u8>, ItemError> {
        let response = self.http_client.request(request).await?;
        envelope::unwrap(&response.body)
    }

    /// Fetches `item` by its identity.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::MissingId`] without sending anything if the item
    /// has no identity.
    pub async fn get<T: CollectionItem>(&self, item: &T) -> Result<T, ItemError> {
        let data = self.fetch_data(items::get_request(item)?).await?;
        item.merge_item(&data)
    }

    /// Fetches the item of type `T` with identity `id`, without a prototype.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::MissingId`] if `id` is unset.
    pub async fn get_by_id<T: CollectionItem>(&self, id: &T::Id) -> Result<T, ItemError> {
        if id.is_unset() {
            return Err(ItemError::MissingId {
                collection: T::COLLECTION.to_string(),
                operation: ItemOperation::Get.as_str(),
            });
        }

        let request = ItemRequest::new(ItemOperation::Get, T::COLLECTION)
            .id(id.to_string())
            .fields(T::FIELDS)
            .build()?;
        T::deserialize_item(&self.fetch_data(request).await?)
    }

    /// Returns the raw JSON array of every item matching `filter`.
    ///
    /// The whole result set is buffered; the caller decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the envelope is malformed.
    pub async fn find_items<T: Resource>(&self, item: &T, filter: &str) -> Result<Vec<u8>, ItemError> {
        self.fetch_data(items::find_request(item, filter)?).await
    }

    /// Fetches the first item matching `filter`.
    ///
    /// When nothing matches, `item` is returned unchanged; this is not an
    /// error. Check [`CollectionItem::exists`] to tell the cases apart when
    /// the prototype has no identity.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the payload is not an
    /// array of `T`.
    pub async fn find<T: CollectionItem>(&self, item: &T, filter: &str) -> Result<T, ItemError> {
        let data = self.find_items(item, filter).await?;
        let matches: Vec<&RawValue> = serde_json::from_slice(&data).map_err(ItemError::Decode)?;

        match matches.first() {
            Some(first) => item.merge_item(first.get().as_bytes()),
            None => Ok(item.clone()),
        }
    }

    /// Returns the identity of the first item matching `filter`, or `None`.
    ///
    /// Only the `id` field is requested, whatever the resource's projection.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the payload is malformed.
    pub async fn find_id<T: CollectionItem>(
        &self,
        item: &T,
        filter: &str,
    ) -> Result<Option<T::Id>, ItemError> {
        let request = ItemRequest::new(ItemOperation::Find, item.collection_name())
            .fields("id")
            .filter(filter)
            .build()?;
        let data = self.fetch_data(request).await?;
        let matches: Vec<IdOnly<T::Id>> = envelope::decode(&data)?;

        Ok(matches
            .into_iter()
            .next()
            .and_then(|m| m.id)
            .filter(|id| !id.is_unset()))
    }

    /// Creates `item` and returns it with the server-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if encoding, the request, or decoding fails.
    pub async fn create<T: CollectionItem>(&self, item: &T) -> Result<T, ItemError> {
        let data = self.fetch_data(items::create_request(item)?).await?;
        let mut created = item.merge_item(&data)?;

        if let Ok(IdOnly { id: Some(id) }) = envelope::decode::<IdOnly<T::Id>>(&data) {
            created.set_id(id);
        }

        Ok(created)
    }

    /// Updates the existing remote `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::MissingId`] without sending anything if the item
    /// has no identity.
    pub async fn update<T: CollectionItem>(&self, item: &T) -> Result<T, ItemError> {
        let data = self.fetch_data(items::update_request(item)?).await?;
        item.merge_item(&data)
    }

    /// Creates `item` if it has no identity, updates it otherwise.
    ///
    /// # Errors
    ///
    /// Returns whatever [`create`](Self::create) or [`update`](Self::update) returns.
    pub async fn upsert<T: CollectionItem>(&self, item: &T) -> Result<T, ItemError> {
        if item.exists() {
            tracing::debug!(collection = item.collection_name(), "Upsert: updating existing item");
            self.update(item).await
        } else {
            tracing::debug!(collection = item.collection_name(), "Upsert: creating new item");
            self.create(item).await
        }
    }

    /// Fetches a singleton.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the payload is malformed.
    pub async fn get_singleton<T: SingletonItem>(&self, item: &T) -> Result<T, ItemError> {
        let data = self
            .fetch_data(items::get_singleton_request(item)?)
            .await?;
        item.merge_item(&data)
    }

    /// Updates a singleton.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if encoding, the request, or decoding fails.
    pub async fn update_singleton<T: SingletonItem>(&self, item: &T) -> Result<T, ItemError> {
        let data = self
            .fetch_data(items::update_singleton_request(item)?)
            .await?;
        item.merge_item(&data)
    }

    /// Uploads a file with `POST /files`.
    ///
    /// The multipart body holds `folder` (only when given and non-empty),
    /// `title`, and `file` with the given file name and content type. The
    /// source is read fully into memory before the first attempt, so the
    /// body can be replayed on retries.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Upload`] if `reader` fails and an invalid request
    /// error if `content_type` is not a valid MIME type.
    pub async fn upload_file<R>(
        &self,
        folder: Option<&str>,
        title: &str,
        filename: &str,
        content_type: &str,
        mut reader: R,
    ) -> Result<File, ItemError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).await?;

        let mut form = MultipartForm::new();
        if let Some(folder) = folder.filter(|f| !f.is_empty()) {
            form = form.text("folder", folder);
        }
        let form = form
            .text("title", title)
            .file("file", filename, content_type, contents);

        let request = HttpRequest::builder(HttpMethod::Post, items::FILES_PATH)
            .multipart(form)
            .build()?;
        envelope::decode(&self.fetch_data(request).await?)
    }

    /// Issues a GET at an arbitrary path and returns the unwrapped payload.
    ///
    /// The bearer token, retry policy and envelope handling still apply.
    /// Query parameters are encoded in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the envelope is malformed.
    pub async fn get_path(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, ItemError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        for (key, value) in query {
            builder = builder.query_param(*key, *value);
        }
        self.fetch_data(builder.build()?).await
    }

    /// Fetches the user owning `token`.
    ///
    /// `token` is used for this call only, in place of the client's token.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the request fails or the payload is malformed.
    pub async fn get_current_user(&self, token: &str) -> Result<User, ItemError> {
        let request = HttpRequest::builder(HttpMethod::Get, items::CURRENT_USER_PATH)
            .bearer_token(token)
            .build()?;
        envelope::decode(&self.fetch_data(request).await?)
    }

    /// Fetches a role by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::MissingId`] if `id` is empty.
    pub async fn get_role(&self, id: &str) -> Result<Role, ItemError> {
        if id.is_empty() {
            return Err(ItemError::MissingId {
                collection: "roles".to_string(),
                operation: ItemOperation::Get.as_str(),
            });
        }

        let request = HttpRequest::builder(HttpMethod::Get, items::role_path(id)).build()?;
        envelope::decode(&self.fetch_data(request).await?)
    }
}

/// Fetches the item of type `T` with identity `id` using a short-lived
/// client built from `config`.
///
/// Prefer [`DirectusClient::get_by_id`] when making more than one call.
///
/// # Errors
///
/// Returns [`ItemError::Config`] if the client cannot be built, otherwise
/// whatever [`DirectusClient::get_by_id`] returns.
pub async fn get_item<T: CollectionItem>(config: &DirectusConfig, id: &T::Id) -> Result<T, ItemError> {
    let client = DirectusClient::from_config(config)?;
    client.get_by_id(id).await
}
