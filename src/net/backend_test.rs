use std::sync::atomic::{AtomicU32, Ordering};

use super::*;

struct CountingBackend {
    uploads: AtomicU32,
}

#[async_trait(?Send)]
impl Backend for CountingBackend {
    async fn ipfs_sync_up(
        &self,
        project_id: &str,
        keep_state: bool,
        settings: UploadSettings,
    ) -> Result<String, BackendError> {
        self.uploads.fetch_add(1, Ordering::Relaxed);
        Ok(format!("Qm-{project_id}-{keep_state}-{}", settings.include_build_info))
    }

    async fn project_list(&self) -> Result<Vec<ProjectListItem>, BackendError> {
        Ok(vec![ProjectListItem { id: "p-1".to_owned(), name: "Escrow".to_owned(), updated_at: None }])
    }
}

fn request(keep_state: bool, include_build_info: bool) -> UploadRequest {
    UploadRequest {
        ticket: 7,
        project_id: "p-9".to_owned(),
        keep_state,
        settings: UploadSettings { include_build_info },
    }
}

#[test]
fn run_upload_forwards_request_fields() {
    let backend = CountingBackend { uploads: AtomicU32::new(0) };
    let hash = futures::executor::block_on(run_upload(&backend, &request(true, true), None)).unwrap();
    assert_eq!(hash, "Qm-p-9-true-true");
    assert_eq!(backend.uploads.load(Ordering::Relaxed), 1);
}

#[test]
fn http_backend_is_unavailable_outside_browser() {
    let backend = HttpBackend::new("/api");
    let result = futures::executor::block_on(run_upload(&backend, &request(false, false), None));
    assert_eq!(result, Err(BackendError::Unavailable));
    let list = futures::executor::block_on(backend.project_list());
    assert_eq!(list, Err(BackendError::Unavailable));
}

#[test]
fn handle_derefs_to_wrapped_backend() {
    let handle = BackendHandle::new(CountingBackend { uploads: AtomicU32::new(0) });
    let list = futures::executor::block_on(handle.project_list()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Escrow");
    let hash = futures::executor::block_on(run_upload(&*handle, &request(false, true), None)).unwrap();
    assert_eq!(hash, "Qm-p-9-false-true");
}

#[test]
fn backend_error_messages_name_the_cause() {
    assert_eq!(BackendError::Status(503).to_string(), "backend responded with status 503");
    assert_eq!(BackendError::Timeout(1500).to_string(), "request timed out after 1500 ms");
    assert_eq!(BackendError::Request("offline".to_owned()).to_string(), "request failed: offline");
}

#[test]
fn race_timeout_fails_when_timer_fires_first() {
    let upload = futures::future::pending::<Result<String, BackendError>>();
    let result = futures::executor::block_on(race_timeout(upload, futures::future::ready(()), 250));
    assert_eq!(result, Err(BackendError::Timeout(250)));
}

#[test]
fn race_timeout_returns_upload_result_when_it_finishes_first() {
    let upload = futures::future::ready(Ok("Qm123".to_owned()));
    let result = futures::executor::block_on(race_timeout(upload, futures::future::pending(), 250));
    assert_eq!(result, Ok("Qm123".to_owned()));
}

#[test]
fn race_timeout_passes_backend_errors_through() {
    let upload = futures::future::ready(Err(BackendError::Status(502)));
    let result = futures::executor::block_on(race_timeout(upload, futures::future::pending(), 250));
    assert_eq!(result, Err(BackendError::Status(502)));
}
