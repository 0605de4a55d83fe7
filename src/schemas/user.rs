//! User schema.
//!
//! Returned by [`DirectusClient::get_current_user`](crate::DirectusClient::get_current_user).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Directus user.
///
/// Secrets such as `password`, `token` and `tfa_secret` are only populated
/// when the requesting token is allowed to read them; Directus otherwise
/// returns them masked or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user identifier (UUID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Avatar file identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Value>,

    /// Data Studio theme ("auto", "light" or "dark").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfa_secret: Option<Value>,

    /// Account status, e.g. "active" or "suspended".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Identifier of the user's role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Static token, if one was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,

    /// Last Data Studio page visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,

    /// Authentication provider, "default" for local accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
}
