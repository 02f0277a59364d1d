use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(User { id: "u-1".to_owned(), name: "Ada".to_owned(), avatar_url: None }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
