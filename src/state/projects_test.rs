use super::*;

fn project(id: &str, name: &str) -> ProjectListItem {
    ProjectListItem { id: id.to_owned(), name: name.to_owned(), updated_at: None }
}

#[test]
fn projects_state_defaults() {
    let s = ProjectsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.loaded);
    assert!(s.error.is_none());
}

#[test]
fn finish_load_success_replaces_items() {
    let mut s = ProjectsState::default();
    s.begin_load();
    assert!(s.loading);
    s.finish_load(Ok(vec![project("p-1", "Token"), project("p-2", "DAO")]));
    assert!(!s.loading);
    assert!(s.loaded);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.find("p-2").map(|p| p.name.as_str()), Some("DAO"));
    assert!(s.find("p-3").is_none());
}

#[test]
fn finish_load_error_keeps_previous_items() {
    let mut s = ProjectsState::default();
    s.finish_load(Ok(vec![project("p-1", "Token")]));
    s.begin_load();
    s.finish_load(Err(BackendError::Status(500)));
    assert!(!s.loading);
    assert_eq!(s.items, vec![project("p-1", "Token")]);
    assert_eq!(s.error.as_deref(), Some("backend responded with status 500"));
}

#[test]
fn successful_refresh_clears_error() {
    let mut s = ProjectsState::default();
    s.finish_load(Err(BackendError::Unavailable));
    assert!(!s.loaded);
    s.finish_load(Ok(Vec::new()));
    assert!(s.loaded);
    assert!(s.error.is_none());
}
