//! Directus system collection shapes.
//!
//! These are plain data types returned by the fixed system endpoints:
//!
//! - [`User`]: `GET /users/me`
//! - [`Role`]: `GET /roles/{id}`
//! - [`File`]: `POST /files`
//!
//! Loosely typed fields that Directus may return as any JSON value are kept
//! as [`serde_json::Value`].

mod file;
mod role;
mod user;

pub use file::File;
pub use role::Role;
pub use user::User;
