//! Backend collaborator used by the dashboard and the save dialog.
//!
//! DESIGN
//! ======
//! Components never call HTTP helpers directly. They read a [`BackendHandle`]
//! from context so tests and embedders can swap in their own implementation.
//! Futures are `?Send` because the browser runtime is single-threaded.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::{IpfsSyncUpRequest, ProjectListItem};
use crate::state::upload::{UploadRequest, UploadSettings};

/// Error returned by every [`Backend`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network, CORS, serialization).
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success HTTP status.
    #[error("backend responded with status {0}")]
    Status(u16),
    /// The response body could not be interpreted.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The call did not finish within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// No backend is reachable in this environment (server render, tests).
    #[error("backend not available in this environment")]
    Unavailable,
}

/// Storage/network operations the UI depends on.
#[async_trait(?Send)]
pub trait Backend {
    /// Upload a snapshot of `project_id` to IPFS and return its content hash.
    async fn ipfs_sync_up(
        &self,
        project_id: &str,
        keep_state: bool,
        settings: UploadSettings,
    ) -> Result<String, BackendError>;

    /// List the projects visible to the current user.
    async fn project_list(&self) -> Result<Vec<ProjectListItem>, BackendError>;
}

/// [`Backend`] over the studio REST API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn ipfs_sync_up(
        &self,
        project_id: &str,
        keep_state: bool,
        settings: UploadSettings,
    ) -> Result<String, BackendError> {
        let body = IpfsSyncUpRequest { keep_state, include_build_info: settings.include_build_info };
        super::api::ipfs_sync_up(&self.api_base, project_id, body).await
    }

    async fn project_list(&self) -> Result<Vec<ProjectListItem>, BackendError> {
        super::api::fetch_projects(&self.api_base).await
    }
}

/// Shareable backend reference provided through Leptos context.
#[derive(Clone)]
pub struct BackendHandle(Arc<dyn Backend + Send + Sync>);

impl BackendHandle {
    pub fn new(backend: impl Backend + Send + Sync + 'static) -> Self {
        Self(Arc::new(backend))
    }

    pub fn http(api_base: impl Into<String>) -> Self {
        Self::new(HttpBackend::new(api_base))
    }
}

impl Deref for BackendHandle {
    type Target = dyn Backend + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackendHandle")
    }
}

/// Execute an upload request, racing it against `timeout_ms` in the browser.
///
/// Outside the browser there is no timer source and the timeout is ignored.
///
/// # Errors
///
/// Returns the backend's error, or [`BackendError::Timeout`] on expiry.
pub async fn run_upload<B: Backend + ?Sized>(
    backend: &B,
    request: &UploadRequest,
    timeout_ms: Option<u32>,
) -> Result<String, BackendError> {
    let upload = backend.ipfs_sync_up(&request.project_id, request.keep_state, request.settings);

    #[cfg(feature = "hydrate")]
    {
        if let Some(ms) = timeout_ms {
            return race_timeout(upload, gloo_timers::future::TimeoutFuture::new(ms), ms).await;
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = timeout_ms;

    upload.await
}

/// Resolve `upload`, or fail with [`BackendError::Timeout`] if `timer`
/// finishes first.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn race_timeout<F, T>(upload: F, timer: T, ms: u32) -> Result<String, BackendError>
where
    F: std::future::Future<Output = Result<String, BackendError>>,
    T: std::future::Future<Output = ()>,
{
    use futures::future::{Either, select};

    let upload = std::pin::pin!(upload);
    let timer = std::pin::pin!(timer);
    match select(upload, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(BackendError::Timeout(ms)),
    }
}
