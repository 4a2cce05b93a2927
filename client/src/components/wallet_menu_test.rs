use super::*;

#[test]
fn label_shows_address_when_signed_in() {
    let state = SessionState { address: Some("0xABC".to_owned()), authed: true, ..SessionState::default() };
    assert_eq!(wallet_label(&state), "0xABC");
}

#[test]
fn label_hides_stale_address_when_signed_out() {
    let state = SessionState { address: Some("0xABC".to_owned()), authed: false, ..SessionState::default() };
    assert_eq!(wallet_label(&state), NOT_CONNECTED_LABEL);
}

#[test]
fn label_for_default_state() {
    assert_eq!(wallet_label(&SessionState::default()), "Not connected");
}
