//! Route guard for wallet-gated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page outside `PUBLIC_ROUTES` requires a signed-in session. The guard
//! waits for in-flight session work to settle before deciding.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{HOME, is_public_route};
use crate::state::session::SessionState;

/// True when `path` needs a session and the settled state has none.
pub fn should_redirect_unauth(state: &SessionState, path: &str) -> bool {
    !state.loading && !state.authed && !is_public_route(path)
}

/// Redirect to the landing page whenever a gated path is shown signed out.
pub fn install_unauth_redirect<P, F>(session: RwSignal<SessionState>, pathname: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let path = pathname();
        session.with(|state| redirect_if_unauth(state, &path, &navigate));
    });
}

/// Send the user home if `path` is gated and the session is signed out.
/// Returns whether a redirect was issued.
fn redirect_if_unauth<F>(state: &SessionState, path: &str, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    if !should_redirect_unauth(state, path) {
        return false;
    }
    navigate(HOME, NavigateOptions::default());
    true
}
