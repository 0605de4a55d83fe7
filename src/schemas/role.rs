//! Role schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Directus role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// The role identifier (UUID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Material icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// IP allow-list, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_access: Option<Value>,

    /// Whether two-factor authentication is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_tfa: Option<bool>,

    /// Whether members bypass permission checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_access: Option<bool>,

    /// Whether members may use the Data Studio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_access: Option<bool>,

    /// Identifiers of the users holding this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}
