//! REST API helpers for communicating with the studio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning `None` or
//! [`BackendError::Unavailable`] since these endpoints are only meaningful in
//! the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::backend::BackendError;
use super::types::{IpfsSyncUpRequest, ProjectListItem, User};

#[cfg(any(test, feature = "hydrate"))]
fn current_user_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn projects_endpoint(api_base: &str) -> String {
    format!("{api_base}/projects")
}

#[cfg(any(test, feature = "hydrate"))]
fn ipfs_sync_up_endpoint(api_base: &str, project_id: &str) -> String {
    format!("{api_base}/projects/{project_id}/ipfs")
}

/// Reject a successful response that carries no usable content hash.
/// A non-blank hash is returned exactly as received.
#[cfg(any(test, feature = "hydrate"))]
fn validate_hash(hash: String) -> Result<String, BackendError> {
    if hash.trim().is_empty() {
        return Err(BackendError::Decode("empty content hash".to_owned()));
    }
    Ok(hash)
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(api_base: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&current_user_endpoint(api_base))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        None
    }
}

/// Fetch the project list for the current user.
///
/// # Errors
///
/// Returns a [`BackendError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a project list.
pub async fn fetch_projects(api_base: &str) -> Result<Vec<ProjectListItem>, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&projects_endpoint(api_base))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        resp.json::<Vec<ProjectListItem>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Err(BackendError::Unavailable)
    }
}

/// Upload a project snapshot to IPFS and return its content hash.
///
/// # Errors
///
/// Returns a [`BackendError`] if the request fails, the server responds with a
/// non-OK status, or the response carries no hash.
pub async fn ipfs_sync_up(
    api_base: &str,
    project_id: &str,
    body: IpfsSyncUpRequest,
) -> Result<String, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&ipfs_sync_up_endpoint(api_base, project_id))
            .json(&body)
            .map_err(|e| BackendError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        let parsed: super::types::IpfsSyncUpResponse = resp
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        validate_hash(parsed.hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, project_id, body);
        Err(BackendError::Unavailable)
    }
}
