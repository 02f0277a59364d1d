//! Wire types shared with the studio backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user account as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A project summary for dashboard lists and the project switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListItem {
    pub id: String,
    pub name: String,
    /// Last modification time as reported by the backend, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST {api}/projects/{id}/ipfs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpfsSyncUpRequest {
    pub keep_state: bool,
    #[serde(default)]
    pub include_build_info: bool,
}

/// Response for `POST {api}/projects/{id}/ipfs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpfsSyncUpResponse {
    /// Content hash of the uploaded snapshot.
    pub hash: String,
}
