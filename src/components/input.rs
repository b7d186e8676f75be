use leptos::prelude::*;

/// Controlled text input bound to a signal. `on_enter` fires when the
/// Enter key is pressed inside the field, matching the submit button.
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] on_enter: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(cb) = on_enter {
                cb.run(());
            }
        }
    };

    view! {
        <input
            id=id
            type=move || input_type.get().unwrap_or_else(|| "text".to_string())
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            on:keydown=on_keydown
            class=format!(
                "flex h-12 w-full rounded-md border border-gray-300 bg-white px-4 py-3 text-base \
                 placeholder:text-gray-500 focus-visible:outline-none focus-visible:ring-2 \
                 focus-visible:ring-blue-500 disabled:cursor-not-allowed disabled:opacity-50 {}",
                class
            )
        />
    }
}
