use leptos::prelude::*;

#[component]
pub fn Label(
    children: Children,
    #[prop(optional, into)] html_for: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <label
            for=html_for
            class=format!("text-sm font-medium leading-none text-gray-700 {}", class)
        >
            {children()}
        </label>
    }
}
