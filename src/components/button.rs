use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Ghost,
    Outline,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

/// Styled button. Stateless: disabled and click handling are entirely
/// the caller's.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: String,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let base = "inline-flex items-center justify-center rounded-md font-medium transition-colors \
                focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 \
                disabled:opacity-50 disabled:pointer-events-none select-none";

    let variant_classes = match variant {
        ButtonVariant::Default => "bg-blue-600 text-white hover:bg-blue-700 active:bg-blue-800",
        ButtonVariant::Secondary => "bg-gray-100 text-gray-900 hover:bg-gray-200 active:bg-gray-300",
        ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700 active:bg-red-800",
        ButtonVariant::Ghost => "hover:bg-gray-100 hover:text-gray-900 active:bg-gray-200",
        ButtonVariant::Outline => {
            "border border-gray-300 hover:bg-gray-100 hover:text-gray-900 active:bg-gray-200"
        }
    };

    let size_classes = match size {
        ButtonSize::Default => "h-12 py-3 px-6 text-base",
        ButtonSize::Sm => "h-10 px-4 text-sm",
        ButtonSize::Lg => "h-14 px-8 text-lg",
        ButtonSize::Icon => "h-12 w-12 p-0",
    };

    view! {
        <button
            class=format!("{} {} {} {}", base, variant_classes, size_classes, class)
            disabled=move || disabled.get().unwrap_or(false)
            on:click=on_click
        >
            {children()}
        </button>
    }
}
