//! Browser-facing implementations of the session collaborators.
//!
//! Signals and the router work in every build. The clipboard needs the
//! `csr` feature; native builds report it as unavailable.

#[cfg(test)]
#[path = "adapters_test.rs"]
mod adapters_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use leptos_router::NavigateOptions;

use super::{Clipboard, ClipboardError, Navigator, Notifier, SessionStore, StoreError};
use crate::state::notifications::{NotificationLevel, NotificationsState};
use crate::state::session::SessionState;

impl SessionStore for RwSignal<SessionState> {
    fn snapshot(&self) -> Result<SessionState, StoreError> {
        GetUntracked::try_get_untracked(self).ok_or(StoreError::Disposed)
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) -> Result<(), StoreError> {
        Update::try_update(self, f).ok_or(StoreError::Disposed)
    }
}

impl Notifier for RwSignal<NotificationsState> {
    fn notify(&self, message: &str, level: NotificationLevel) {
        let Some(id) = Update::try_update(self, |s| s.push(message, level)) else {
            leptos::logging::warn!("notification dropped: {message}");
            return;
        };
        schedule_dismiss(*self, id);
    }
}

#[cfg(feature = "csr")]
fn schedule_dismiss(notifications: RwSignal<NotificationsState>, id: u64) {
    use crate::state::notifications::NOTIFICATION_TIMEOUT_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
        Update::try_update(&notifications, |s| s.dismiss(id));
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(notifications: RwSignal<NotificationsState>, id: u64) {
    let _ = (notifications, id);
}

/// Adapts the router's navigate closure (`use_navigate()`).
#[derive(Clone)]
pub struct RouteNavigator<F>(pub F);

impl<F> Navigator for RouteNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// `navigator.clipboard` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[async_trait::async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
            let clipboard: Option<web_sys::Clipboard> = window.navigator().clipboard().into();
            let clipboard = clipboard.ok_or(ClipboardError::Unavailable)?;
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}

/// Session bound to the context-provided signals, the router, and the
/// browser clipboard. Call from a component rendered inside `<Router>`.
pub fn use_session() -> super::Session<
    RwSignal<SessionState>,
    RwSignal<NotificationsState>,
    RouteNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static>,
    BrowserClipboard,
> {
    let session = leptos::prelude::expect_context::<RwSignal<SessionState>>();
    let notifications = leptos::prelude::expect_context::<RwSignal<NotificationsState>>();
    let navigate = leptos_router::hooks::use_navigate();
    super::Session::new(session, notifications, RouteNavigator(navigate), BrowserClipboard)
}
