//! Login page

use leptos::prelude::*;

use crate::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Label, LoadingSpinner, NotificationBanner, TextInput,
};
use crate::state::AppState;

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let is_loading = {
        let state = state.clone();
        Signal::derive(move || state.auth.get().is_loading())
    };

    // Button press and Enter in either field go through the same path.
    // The fields are handed over as-is; validation is the verifier's job.
    let submit = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            state.login(email.get_untracked(), password.get_untracked());
        })
    };

    let password_type = Signal::derive(move || {
        if show_password.get() {
            "text".to_string()
        } else {
            "password".to_string()
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <Card class="w-full max-w-md">
                <CardHeader class="text-center">
                    <CardTitle class="text-3xl text-blue-600">"GroceryShop"</CardTitle>
                    <CardDescription class="text-base">"Mobile Management System"</CardDescription>
                </CardHeader>
                <CardContent class="space-y-6">
                    <div>
                        <Label html_for="email" class="text-base">"Email"</Label>
                        <TextInput
                            id="email"
                            input_type="email"
                            placeholder="Enter your email"
                            value=email
                            on_enter=submit
                        />
                    </div>
                    <div>
                        <Label html_for="password" class="text-base">"Password"</Label>
                        <div class="relative">
                            <TextInput
                                id="password"
                                input_type=password_type
                                placeholder="Enter your password"
                                value=password
                                on_enter=submit
                            />
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                class="absolute right-2 top-0 h-full"
                                on_click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </Button>
                        </div>
                    </div>
                    <Button
                        class="w-full h-14 text-lg"
                        disabled=is_loading
                        on_click=move |_| submit.run(())
                    >
                        {move || if is_loading.get() {
                            view! {
                                <span class="flex items-center justify-center gap-2">
                                    <LoadingSpinner />
                                    "Logging in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span>"Login to Continue"</span> }.into_any()
                        }}
                    </Button>
                    <div class="text-sm text-gray-600 text-center bg-gray-100 p-4 rounded-lg">
                        <p class="font-medium mb-2">"Demo credentials:"</p>
                        <p>"Email: " {DEMO_EMAIL}</p>
                        <p>"Password: " {DEMO_PASSWORD}</p>
                    </div>
                </CardContent>
            </Card>

            <NotificationBanner notification=state.notification />
        </div>
    }
}
