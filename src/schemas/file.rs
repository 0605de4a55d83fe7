//! File schema.
//!
//! Returned by [`DirectusClient::upload_file`](crate::DirectusClient::upload_file).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file stored by Directus.
///
/// `filesize`, `width`, `height` and `duration` are reported as numbers or
/// numeric strings depending on the Directus version and database, so they
/// stay untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// The file identifier (UUID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Storage adapter name, e.g. "local" or "s3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,

    /// Name of the file on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_disk: Option<String>,

    /// Name offered when the file is downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_download: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// MIME type detected by Directus.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// Identifier of the containing folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Identifier of the uploading user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    /// Extracted metadata (EXIF, IPTC, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
