//! GroceryShop - point-of-sale and inventory UI
//!
//! A Leptos single-page app for a small grocery shop: login gate,
//! product catalog, POS checkout and a dashboard over in-memory data.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod components;
pub mod data;
pub mod pages;
pub mod session;
pub mod state;
pub mod types;

use leptos::prelude::*;

use components::{Header, NotificationBanner};
use pages::{DashboardPage, LoginPage, PosPage, ProductsPage};
use state::AppState;
use types::View;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state; the persisted flag picks the start phase.
    let app_state = AppState::default();
    provide_context(app_state.clone());

    let auth = app_state.auth;
    let view = app_state.view;
    let notification = app_state.notification;

    view! {
        <main class="min-h-screen bg-gray-50 text-gray-900">
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <Header />
                // Pure view switch; no data is reloaded on change.
                {move || match view.get() {
                    View::Dashboard => view! { <DashboardPage /> }.into_any(),
                    View::Products => view! { <ProductsPage /> }.into_any(),
                    View::Pos => view! { <PosPage /> }.into_any(),
                }}
                <NotificationBanner notification=notification />
            </Show>
        </main>
    }
}
