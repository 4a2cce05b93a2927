#![cfg(not(feature = "csr"))]

use super::*;
use crate::session::Session;
use leptos::prelude::Dispose;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn signal_store_snapshot_and_update() {
    let session = RwSignal::new(SessionState::default());

    SessionStore::update(&session, |s| s.address = Some("0xABC".to_owned())).unwrap();

    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.address.as_deref(), Some("0xABC"));
}

#[test]
fn disposed_signal_store_reports_disposed() {
    let session = RwSignal::new(SessionState::default());
    session.dispose();

    assert_eq!(session.snapshot().unwrap_err(), StoreError::Disposed);
    assert_eq!(SessionStore::update(&session, |s| s.authed = true), Err(StoreError::Disposed));
}

#[test]
fn signal_notifier_queues_notification() {
    let notifications = RwSignal::new(NotificationsState::default());

    notifications.notify("Address copied to clipboard", NotificationLevel::Success);

    let items = notifications.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message, "Address copied to clipboard");
    assert_eq!(items[0].level, NotificationLevel::Success);
}

#[test]
fn route_navigator_forwards_path() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let navigator = RouteNavigator(move |path: &str, _opts: NavigateOptions| sink.borrow_mut().push(path.to_owned()));

    navigator.navigate("/");

    assert_eq!(*seen.borrow(), vec!["/".to_owned()]);
}

#[tokio::test]
async fn browser_clipboard_is_unavailable_natively() {
    assert_eq!(BrowserClipboard.write_text("0xABC").await, Err(ClipboardError::Unavailable));
}

#[tokio::test]
async fn signal_backed_session_round_trip() {
    let state = RwSignal::new(SessionState {
        address: Some("0xABC".to_owned()),
        authed: true,
        ..SessionState::default()
    });
    let notifications = RwSignal::new(NotificationsState::default());
    let paths = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&paths);
    let session = Session::new(
        state,
        notifications,
        RouteNavigator(move |path: &str, _opts: NavigateOptions| sink.borrow_mut().push(path.to_owned())),
        BrowserClipboard,
    );

    session.copy_address_to_clipboard().await;
    let items = notifications.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].level, NotificationLevel::Error);

    session.disconnect().await;
    let after = state.get_untracked();
    assert!(after.address.is_none());
    assert!(!after.authed);
    assert_eq!(*paths.borrow(), vec!["/".to_owned()]);
}
