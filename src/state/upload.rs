//! IPFS save dialog state machine.
//!
//! DESIGN
//! ======
//! The dialog is always in exactly one [`UploadState`]. The settings view is
//! an overlay: entering it stores the settled state it covers, and leaving it
//! restores that state untouched.
//!
//! Uploads are identified by a ticket. A completion is applied only while the
//! dialog is still `Uploading` that same ticket, which gives at-most-one
//! upload in flight and drops late results from timed-out calls.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::backend::BackendError;
use crate::util::notify::Notifier;

/// Fragment joined between the page location and the content hash.
pub const SHARE_ROUTE: &str = "#/ipfs/";

/// Generic message shown for every upload failure.
pub const UPLOAD_FAILED_MESSAGE: &str =
    "Error: Something went wrong when uploading to IPFS. Please try again later.";

/// Options edited in the settings panel and sent with the next upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UploadSettings {
    pub include_build_info: bool,
}

impl UploadSettings {
    #[must_use]
    pub fn with_include_build_info(self, include_build_info: bool) -> Self {
        Self { include_build_info, ..self }
    }
}

/// Result of a finished upload.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedUpload {
    pub share_url: String,
    /// Completion time in epoch milliseconds.
    pub uploaded_at_ms: f64,
}

/// States the settings overlay can sit on top of.
#[derive(Clone, Debug, PartialEq)]
pub enum SettledState {
    Idle,
    Ready(SharedUpload),
}

impl From<SettledState> for UploadState {
    fn from(settled: SettledState) -> Self {
        match settled {
            SettledState::Idle => Self::Idle,
            SettledState::Ready(shared) => Self::Ready(shared),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    Idle,
    Uploading {
        ticket: u64,
        /// Result of the previous upload, kept until the new one lands.
        previous: Option<SharedUpload>,
    },
    Ready(SharedUpload),
    SettingsOpen {
        return_to: SettledState,
    },
}

/// Which sub-view the dialog renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogView<'a> {
    Prompt,
    Uploading { previous: Option<&'a SharedUpload> },
    Share(&'a SharedUpload),
    Settings,
}

/// Everything the async driver needs to perform one upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub ticket: u64,
    pub project_id: String,
    pub keep_state: bool,
    pub settings: UploadSettings,
}

/// Build the share link for `hash` relative to the current page.
pub fn share_url(location: &str, hash: &str) -> String {
    format!("{location}{SHARE_ROUTE}{hash}")
}

/// Save dialog model owned by one dialog instance.
#[derive(Clone, Debug)]
pub struct SaveDialogState {
    project_id: String,
    keep_state: bool,
    settings: UploadSettings,
    state: UploadState,
    next_ticket: u64,
}

impl SaveDialogState {
    pub fn new(project_id: impl Into<String>, keep_state: bool) -> Self {
        Self {
            project_id: project_id.into(),
            keep_state,
            settings: UploadSettings::default(),
            state: UploadState::Idle,
            next_ticket: 1,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn settings(&self) -> UploadSettings {
        self.settings
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// Share URL of the last successful upload, when currently shown or
    /// covered by the settings overlay.
    pub fn share_url(&self) -> Option<&str> {
        match &self.state {
            UploadState::Ready(shared)
            | UploadState::SettingsOpen { return_to: SettledState::Ready(shared) } => Some(&shared.share_url),
            _ => None,
        }
    }

    pub fn view(&self) -> DialogView<'_> {
        match &self.state {
            UploadState::Idle => DialogView::Prompt,
            UploadState::Uploading { previous, .. } => DialogView::Uploading { previous: previous.as_ref() },
            UploadState::Ready(shared) => DialogView::Share(shared),
            UploadState::SettingsOpen { .. } => DialogView::Settings,
        }
    }

    /// Enter `Uploading` and hand back the request to execute.
    ///
    /// Returns `None` unless the dialog is `Idle` or `Ready`, so a second
    /// trigger while an upload is pending issues nothing.
    pub fn start_upload(&mut self) -> Option<UploadRequest> {
        let previous = match &self.state {
            UploadState::Idle => None,
            UploadState::Ready(shared) => Some(shared.clone()),
            UploadState::Uploading { .. } | UploadState::SettingsOpen { .. } => return None,
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.state = UploadState::Uploading { ticket, previous };
        log::debug!("ipfs upload {ticket} started for project {}", self.project_id);

        Some(UploadRequest {
            ticket,
            project_id: self.project_id.clone(),
            keep_state: self.keep_state,
            settings: self.settings,
        })
    }

    /// Apply the outcome of the upload identified by `ticket`.
    ///
    /// Success moves to `Ready` with a share URL built from `location`.
    /// Failure is logged, reported once through `notifier`, and returns the
    /// dialog to `Idle`. Returns `false` when the completion is stale.
    pub fn finish_upload(
        &mut self,
        ticket: u64,
        result: Result<String, BackendError>,
        location: &str,
        now_ms: f64,
        notifier: &dyn Notifier,
    ) -> bool {
        match &self.state {
            UploadState::Uploading { ticket: current, .. } if *current == ticket => {}
            _ => {
                log::debug!("ignoring stale ipfs upload completion {ticket}");
                return false;
            }
        }

        match result {
            Ok(hash) => {
                log::info!("ipfs upload {ticket} finished: {hash}");
                self.state = UploadState::Ready(SharedUpload {
                    share_url: share_url(location, &hash),
                    uploaded_at_ms: now_ms,
                });
            }
            Err(e) => {
                log::warn!("ipfs upload {ticket} for project {} failed: {e}", self.project_id);
                self.state = UploadState::Idle;
                notifier.notify_error(UPLOAD_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Cover the current settled state with the settings view.
    pub fn open_settings(&mut self) {
        let return_to = match &self.state {
            UploadState::Idle => SettledState::Idle,
            UploadState::Ready(shared) => SettledState::Ready(shared.clone()),
            UploadState::Uploading { .. } | UploadState::SettingsOpen { .. } => return,
        };
        self.state = UploadState::SettingsOpen { return_to };
    }

    /// Leave the settings view, restoring whatever it covered.
    pub fn close_settings(&mut self) {
        if let UploadState::SettingsOpen { return_to } = &self.state {
            self.state = return_to.clone().into();
        }
    }

    /// Commit settings for the next upload. An in-flight request keeps the
    /// settings it was started with.
    pub fn update_settings(&mut self, settings: UploadSettings) {
        self.settings = settings;
    }
}
