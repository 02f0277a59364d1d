use super::*;
use crate::net::backend::BackendError;
use crate::util::notify::Notifier;

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify_error(&self, _message: &str) {}
}

#[test]
fn screen_for_idle_is_prompt() {
    let dialog = SaveDialogState::new("p-1", false);
    assert_eq!(screen_for(&dialog), Screen::Prompt);
}

#[test]
fn screen_for_uploading_carries_previous_url() {
    let mut dialog = SaveDialogState::new("p-1", false);
    let first = dialog.start_upload().unwrap();
    dialog.finish_upload(first.ticket, Ok("QmA".to_owned()), "https://s.test/", 0.0, &SilentNotifier);
    dialog.start_upload().unwrap();
    assert_eq!(
        screen_for(&dialog),
        Screen::Uploading { previous_url: Some("https://s.test/#/ipfs/QmA".to_owned()) }
    );
}

#[test]
fn screen_for_settings_shows_committed_settings() {
    let mut dialog = SaveDialogState::new("p-1", false);
    dialog.update_settings(UploadSettings { include_build_info: true });
    dialog.open_settings();
    assert_eq!(screen_for(&dialog), Screen::Settings(UploadSettings { include_build_info: true }));
}

#[test]
fn screen_for_failed_upload_returns_to_prompt() {
    let mut dialog = SaveDialogState::new("p-1", false);
    let request = dialog.start_upload().unwrap();
    dialog.finish_upload(request.ticket, Err(BackendError::Status(500)), "https://s.test/", 0.0, &SilentNotifier);
    assert_eq!(screen_for(&dialog), Screen::Prompt);
}

#[test]
fn screen_for_ready_is_share() {
    let mut dialog = SaveDialogState::new("p-1", false);
    let request = dialog.start_upload().unwrap();
    dialog.finish_upload(request.ticket, Ok("QmB".to_owned()), "https://s.test/", 42.0, &SilentNotifier);
    assert_eq!(
        screen_for(&dialog),
        Screen::Share(SharedUpload { share_url: "https://s.test/#/ipfs/QmB".to_owned(), uploaded_at_ms: 42.0 })
    );
}

#[test]
fn only_escape_closes_dialog() {
    assert!(closes_dialog("Escape"));
    assert!(!closes_dialog("Enter"));
    assert!(!closes_dialog("Esc"));
}
