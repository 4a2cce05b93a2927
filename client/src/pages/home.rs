//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing route at `/`. Points signed-out players at a chain to connect.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let connected = move || session.with(SessionState::is_connected);

    view! {
        <div class="home-page">
            <h1>"Block Paper Scissors"</h1>
            <Show
                when=connected
                fallback=|| view! {
                    <nav class="home-page__chains">
                        <a href="/ethereum/intro/">"Ethereum"</a>
                        <a href="/filecoin/intro/">"Filecoin"</a>
                        <a href="/polygon/intro/">"Polygon"</a>
                    </nav>
                }
            >
                <a href="/choose-team/" class="home-page__play">"Choose your team"</a>
            </Show>
        </div>
    }
}
