//! Wire models for the user and todo endpoints.
//!
//! Both endpoints return more fields than declared here; unknown fields are
//! ignored during deserialization.

use serde::Deserialize;

/// Display name substituted when the remote user record carries no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Employee record returned by `GET /users/{id}`.
#[derive(Deserialize, Clone, Debug)]
pub struct User {
    /// Employee identifier
    #[serde(default)]
    pub id: i64,

    /// Display name; the remote source may omit it
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Display name, falling back to [`UNKNOWN_NAME`] when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// To-do item returned by `GET /todos?userId={id}`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Identifier of the owning employee
    #[serde(default)]
    pub user_id: i64,

    /// Task title
    #[serde(default)]
    pub title: String,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}
