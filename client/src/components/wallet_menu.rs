//! Wallet status with copy-address and disconnect controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only UI surface that triggers session operations after startup.

#[cfg(test)]
#[path = "wallet_menu_test.rs"]
mod wallet_menu_test;

use leptos::prelude::*;

use crate::session::adapters::use_session;
use crate::state::session::SessionState;

const NOT_CONNECTED_LABEL: &str = "Not connected";

/// Text shown for the current wallet.
fn wallet_label(state: &SessionState) -> String {
    match (&state.address, state.authed) {
        (Some(address), true) => address.clone(),
        _ => NOT_CONNECTED_LABEL.to_owned(),
    }
}

#[component]
pub fn WalletMenu() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = use_session();

    let label = move || state.with(wallet_label);
    let connected = move || state.with(SessionState::is_connected);
    let busy = move || state.with(|s| s.loading);

    let copy_session = session.clone();
    let on_copy = move |_| {
        let session = copy_session.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            session.copy_address_to_clipboard().await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = session;
    };

    let on_disconnect = move |_| {
        let session = session.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            session.disconnect().await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = session;
    };

    let class = move || if busy() { "wallet-menu wallet-menu--busy" } else { "wallet-menu" };

    view! {
        <div class=class>
            <span class="wallet-menu__address" title="Wallet address">{label}</span>
            <button
                class="btn wallet-menu__copy"
                on:click=on_copy
                disabled=move || !connected()
                title="Copy address"
            >
                "Copy"
            </button>
            <button class="btn wallet-menu__disconnect" on:click=on_disconnect disabled=move || !connected()>
                "Disconnect"
            </button>
        </div>
    }
}
