use super::*;

fn signed_in() -> SessionState {
    SessionState { address: Some("0xABC".to_owned()), authed: true, ..SessionState::default() }
}

#[test]
fn redirects_signed_out_user_from_gated_path() {
    assert!(should_redirect_unauth(&SessionState::default(), "/game/"));
}

#[test]
fn does_not_redirect_on_public_paths() {
    let state = SessionState::default();
    for path in ["", "/", "/choose-team/", "/filecoin/intro/", "/polygon/connect/"] {
        assert!(!should_redirect_unauth(&state, path), "{path:?}");
    }
}

#[test]
fn trailing_slash_variant_is_gated() {
    assert!(should_redirect_unauth(&SessionState::default(), "/choose-team"));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = SessionState { loading: true, ..SessionState::default() };
    assert!(!should_redirect_unauth(&state, "/game/"));
}

#[test]
fn does_not_redirect_when_authed() {
    assert!(!should_redirect_unauth(&signed_in(), "/game/"));
}

// =============================================================
// redirect_if_unauth
// =============================================================

fn recording_navigate() -> (std::rc::Rc<std::cell::RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions)) {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&seen);
    (seen, move |path: &str, _opts: NavigateOptions| sink.borrow_mut().push(path.to_owned()))
}

#[test]
fn gated_path_signed_out_navigates_home_once() {
    let (seen, navigate) = recording_navigate();
    assert!(redirect_if_unauth(&SessionState::default(), "/game/", &navigate));
    assert_eq!(*seen.borrow(), vec!["/".to_owned()]);
}

#[test]
fn public_path_signed_out_does_not_navigate() {
    let (seen, navigate) = recording_navigate();
    assert!(!redirect_if_unauth(&SessionState::default(), "/ethereum/connect/", &navigate));
    assert!(seen.borrow().is_empty());
}

#[test]
fn gated_path_while_loading_or_authed_does_not_navigate() {
    let (seen, navigate) = recording_navigate();
    let loading = SessionState { loading: true, ..SessionState::default() };
    assert!(!redirect_if_unauth(&loading, "/game/", &navigate));
    assert!(!redirect_if_unauth(&signed_in(), "/game/", &navigate));
    assert!(seen.borrow().is_empty());
}
