//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{notification_list::NotificationList, wallet_menu::WalletMenu};
use crate::pages::home::HomePage;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Root application component.
///
/// Provides the session and notification contexts, then mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(notifications);

    view! {
        <Title text="Block Paper Scissors"/>

        <Router>
            <SessionBootstrap/>
            <header class="app-header">
                <WalletMenu/>
            </header>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
            <NotificationList/>
        </Router>
    }
}

/// Runs session startup once and guards wallet-only routes.
/// Must render inside `<Router>` for location and navigation hooks.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    install_unauth_redirect(session, move || location.pathname.get(), use_navigate());

    #[cfg(feature = "csr")]
    {
        let ops = crate::session::adapters::use_session();
        leptos::task::spawn_local(async move {
            if ops.initialise().await.is_err() {
                log::warn!("continuing signed out after failed session initialise");
            }
        });
    }
}
