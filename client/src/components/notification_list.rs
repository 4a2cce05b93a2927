//! Toast stack for session notifications.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationsState};

fn notification_class(notification: &Notification) -> String {
    format!("notification notification--{}", notification.level.as_str())
}

/// Renders queued notifications; clicking one dismisses it.
#[component]
pub fn NotificationList() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notifications" role="status" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        let class = notification_class(&n);
                        let on_dismiss = move |_| {
                            notifications.update(|s| {
                                s.dismiss(id);
                            });
                        };
                        view! {
                            <div class=class on:click=on_dismiss>
                                {n.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
