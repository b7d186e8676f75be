use leptos::prelude::*;

use crate::types::{Notification, NotificationKind};

/// Colored banner for one notification.
#[component]
pub fn Alert(notification: Notification, #[prop(optional, into)] class: String) -> impl IntoView {
    let palette = match notification.kind {
        NotificationKind::Success => "border-green-500 bg-green-50 text-green-800",
        NotificationKind::Warning => "border-yellow-500 bg-yellow-50 text-yellow-800",
        NotificationKind::Error => "border-red-500 bg-red-50 text-red-800",
    };

    view! {
        <div class=format!("relative w-full rounded-lg border p-4 {} {}", palette, class)>
            <div class="text-sm text-center font-medium">{notification.message}</div>
        </div>
    }
}

/// Fixed-position wrapper rendering the current notification, if any.
/// Ownership of when a notification appears stays with the caller.
#[component]
pub fn NotificationBanner(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    view! {
        {move || notification.get().map(|n| view! {
            <div class="fixed top-4 right-4 left-4 z-50 md:left-auto md:w-96">
                <Alert notification=n />
            </div>
        })}
    }
}
