//! Wallet session lifecycle: initialise, disconnect, copy address.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI handlers call into [`Session`] to move the shared `SessionState`
//! between states. Each operation may also notify the user or navigate.
//!
//! DESIGN
//! ======
//! The store, notification sink, router, and clipboard are injected through
//! the narrow traits below rather than reached as ambient globals, so the
//! same operations run against Leptos signals in the browser and against
//! recording doubles in tests. See `adapters` for the browser wiring.
//!
//! TRADE-OFFS
//! ==========
//! Operations are not serialized. Two overlapping calls interleave their
//! store writes and the last write wins; a repeat click is expected to be
//! harmless because every transition writes absolute values.

#![allow(clippy::unused_async)]

pub mod adapters;


use crate::routes::HOME;
use crate::state::notifications::NotificationLevel;
use crate::state::session::SessionState;

pub const COPY_SUCCESS_MESSAGE: &str = "Address copied to clipboard";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy address to clipboard";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("session store has been disposed")]
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("no wallet address to copy")]
    NoAddress,
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session initialisation failed: {0}")]
    Initialisation(String),
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Shared session record with snapshot reads and in-place updates.
pub trait SessionStore {
    /// Current state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] once the store is gone.
    fn snapshot(&self) -> Result<SessionState, StoreError>;

    /// Apply `f` to the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] once the store is gone.
    fn update(&self, f: impl FnOnce(&mut SessionState)) -> Result<(), StoreError>;
}

/// Surfaces a transient message to the user.
pub trait Notifier {
    fn notify(&self, message: &str, level: NotificationLevel);
}

/// Client-side navigation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// System clipboard. Browser writes resolve asynchronously and may be refused.
#[async_trait::async_trait(?Send)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the write is refused or no clipboard
    /// exists in this environment.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

// =============================================================================
// SESSION
// =============================================================================

/// Session operations bound to their collaborators.
#[derive(Clone)]
pub struct Session<S, N, R, C> {
    store: S,
    notifier: N,
    navigator: R,
    clipboard: C,
}

impl<S, N, R, C> Session<S, N, R, C>
where
    S: SessionStore,
    N: Notifier,
    R: Navigator,
    C: Clipboard,
{
    pub fn new(store: S, notifier: N, navigator: R, clipboard: C) -> Self {
        Self { store, notifier, navigator, clipboard }
    }

    /// Bring the session to its starting state.
    ///
    /// No wallet handshake happens here; connecting is left to the external
    /// wallet modal. A successful call always ends signed out and idle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Initialisation`] carrying the failure message
    /// after flagging `error`, clearing `loading`, and notifying the user.
    pub async fn initialise(&self) -> Result<(), SessionError> {
        match self.try_initialise() {
            Ok(()) => Ok(()),
            Err(e) => {
                let message = e.to_string();
                leptos::logging::error!("session initialise failed: {message}");
                if let Err(e) = self.store.update(|s| {
                    s.error = true;
                    s.loading = false;
                }) {
                    leptos::logging::error!("could not record initialise failure: {e}");
                }
                self.notifier.notify(&message, NotificationLevel::Error);
                Err(SessionError::Initialisation(message))
            }
        }
    }

    fn try_initialise(&self) -> Result<(), StoreError> {
        self.store.update(|s| {
            s.loading = true;
            s.error = false;
        })?;
        self.store.update(|s| {
            s.address = None;
            s.authed = false;
            s.loading = false;
        })
    }

    /// Forget the connected wallet and return to the landing page.
    pub async fn disconnect(&self) {
        if let Err(e) = self.store.update(|s| {
            s.address = None;
            s.authed = false;
            s.loading = false;
            s.error = false;
        }) {
            leptos::logging::warn!("session reset skipped: {e}");
        }
        self.navigator.navigate(HOME);
    }

    /// Copy the connected address to the clipboard and report the outcome.
    ///
    /// Failures are reported to the user, never to the caller. The session
    /// state is left untouched either way.
    pub async fn copy_address_to_clipboard(&self) {
        match self.try_copy_address().await {
            Ok(()) => self.notifier.notify(COPY_SUCCESS_MESSAGE, NotificationLevel::Success),
            Err(e) => {
                leptos::logging::error!("copy address failed: {e}");
                self.notifier.notify(COPY_FAILURE_MESSAGE, NotificationLevel::Error);
            }
        }
    }

    async fn try_copy_address(&self) -> Result<(), ClipboardError> {
        let address = self.store.snapshot()?.address.ok_or(ClipboardError::NoAddress)?;
        self.clipboard.write_text(&address).await
    }
}
