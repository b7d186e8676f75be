//! Header component

use leptos::prelude::*;

use crate::state::AppState;
use crate::types::View;

/// Header for the authenticated app: shop title, view tabs, logout.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="bg-white border-b sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <h1 class="text-xl font-bold text-blue-600">"GroceryShop"</h1>
                    <span class="text-xs text-gray-500 hidden sm:inline">
                        "Mobile Management System"
                    </span>
                </div>

                <nav class="flex items-center gap-1">
                    {View::all().into_iter().map(|tab| {
                        let state = state.clone();
                        let is_active = Signal::derive({
                            let state = state.clone();
                            move || state.view.get() == tab
                        });
                        view! {
                            <button
                                on:click=move |_| state.view.set(tab)
                                class=move || format!(
                                    "h-10 px-4 rounded-md text-sm font-medium transition-colors {}",
                                    if is_active.get() {
                                        "bg-blue-600 text-white"
                                    } else {
                                        "text-gray-700 hover:bg-gray-100"
                                    }
                                )
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}

                    {
                        let state = state.clone();
                        view! {
                            <button
                                on:click=move |_| state.logout()
                                class="ml-2 h-10 px-4 rounded-md text-sm font-medium text-gray-700 \
                                       hover:bg-gray-100 transition-colors"
                            >
                                "Logout"
                            </button>
                        }
                    }
                </nav>
            </div>
        </header>
    }
}
