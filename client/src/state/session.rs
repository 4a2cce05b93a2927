//! Wallet session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in a single `RwSignal<SessionState>` provided via context. Route
//! guards and wallet-aware components read it; only the operations in
//! `crate::session` write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Borrowed reference to an object owned by an external wallet library.
///
/// The session keeps these around for the wallet-connection client and its
/// modal controller but never drives them itself.
#[derive(Clone)]
pub struct ExternalHandle(Arc<dyn Any + Send + Sync>);

impl ExternalHandle {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// True when both handles point at the same external object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ExternalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExternalHandle(..)")
    }
}

/// Authentication and in-flight status of the wallet session.
///
/// `address` is expected to be `None` whenever `authed` is false. Nothing
/// enforces that here; each session operation upholds it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub address: Option<String>,
    pub authed: bool,
    pub loading: bool,
    pub error: bool,
    pub ethereum_client: Option<ExternalHandle>,
    pub web3modal: Option<ExternalHandle>,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.authed && self.address.is_some()
    }
}
