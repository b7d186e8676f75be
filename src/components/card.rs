//! Card container primitives. Pure markup; the optional `class` prop is
//! appended to the base styling, never replacing it.

use leptos::prelude::*;

#[component]
pub fn Card(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("bg-white rounded-lg border shadow-sm {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("flex flex-col space-y-1.5 p-6 {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <h3 class=format!("text-2xl font-semibold leading-none tracking-tight {}", class)>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <p class=format!("text-sm text-gray-500 {}", class)>
            {children()}
        </p>
    }
}

#[component]
pub fn CardContent(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("p-6 {}", class)>
            {children()}
        </div>
    }
}
