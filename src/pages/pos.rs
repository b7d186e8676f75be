//! POS page: pick products, build a cart, take payment.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, TextInput,
};
use crate::state::AppState;
use crate::types::PaymentMethod;

/// Checkout view: product grid on the left, cart on the right.
#[component]
pub fn PosPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let query = RwSignal::new(String::new());
    let payment_method = RwSignal::new(PaymentMethod::Cash);

    let filtered = {
        let state = state.clone();
        Signal::derive(move || {
            let q = query.get();
            state.products.with(|ps| {
                catalog::search(ps, &q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let cart_total = {
        let state = state.clone();
        Signal::derive(move || state.cart.with(|c| c.total()))
    };
    let cart_empty = {
        let state = state.clone();
        Signal::derive(move || state.cart.with(|c| c.is_empty()))
    };

    let state_for_grid = state.clone();
    let state_for_cart = state.clone();
    let state_for_checkout = state.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-6 grid lg:grid-cols-3 gap-6">
            // Product grid
            <div class="lg:col-span-2 space-y-4">
                <TextInput value=query placeholder="Search products to sell" />

                <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                    {move || {
                        let state = state_for_grid.clone();
                        filtered.get().into_iter().map(|product| {
                            let state = state.clone();
                            let id = product.id.clone();
                            let in_cart = {
                                let state = state.clone();
                                let id = id.clone();
                                Signal::derive(move || state.cart.with(|c| c.quantity_of(&id)))
                            };
                            let sold_out = {
                                let stock = product.stock;
                                Signal::derive(move || in_cart.get() >= stock)
                            };
                            view! {
                                <button
                                    on:click=move |_| state.add_to_cart(&id)
                                    disabled=move || sold_out.get()
                                    class="text-left p-4 bg-white rounded-lg border shadow-sm \
                                           hover:border-blue-500 transition-colors \
                                           disabled:opacity-50 disabled:pointer-events-none"
                                >
                                    <div class="font-medium text-sm">{product.name.clone()}</div>
                                    <div class="text-xs text-gray-500 mb-2">{product.category.clone()}</div>
                                    <div class="flex items-center justify-between">
                                        <span class="font-semibold">
                                            {format!("${:.2}", product.selling_price)}
                                        </span>
                                        <span class="text-xs text-gray-500">
                                            {move || {
                                                let left = product.stock.saturating_sub(in_cart.get());
                                                format!("{left} left")
                                            }}
                                        </span>
                                    </div>
                                </button>
                            }
                        }).collect::<Vec<_>>()
                    }}
                </div>
            </div>

            // Cart
            <Card class="h-fit lg:sticky lg:top-20">
                <CardHeader>
                    <CardTitle class="text-lg">"Current Sale"</CardTitle>
                </CardHeader>
                <CardContent class="pt-0 space-y-4">
                    {move || {
                        let state = state_for_cart.clone();
                        let items = state.cart.with(|c| c.items().to_vec());
                        if items.is_empty() {
                            view! {
                                <p class="text-sm text-gray-500">"Tap products to add them to the sale."</p>
                            }.into_any()
                        } else {
                            view! {
                                <ul class="divide-y">
                                    {items.into_iter().map(|line| {
                                        let dec_id = line.product_id.clone();
                                        let inc_id = line.product_id.clone();
                                        let drop_id = line.product_id.clone();
                                        let state_dec = state.clone();
                                        let state_inc = state.clone();
                                        let state_drop = state.clone();
                                        view! {
                                            <li class="py-2 flex items-center justify-between gap-2">
                                                <div class="flex-1 min-w-0">
                                                    <div class="text-sm font-medium truncate">
                                                        {line.product_name.clone()}
                                                    </div>
                                                    <div class="text-xs text-gray-500">
                                                        {format!("${:.2} each", line.price)}
                                                    </div>
                                                </div>
                                                <div class="flex items-center gap-1">
                                                    <Button
                                                        variant=ButtonVariant::Outline
                                                        size=ButtonSize::Sm
                                                        on_click=move |_| state_dec.decrease_cart_line(&dec_id)
                                                    >
                                                        "−"
                                                    </Button>
                                                    <span class="w-8 text-center text-sm">{line.quantity}</span>
                                                    <Button
                                                        variant=ButtonVariant::Outline
                                                        size=ButtonSize::Sm
                                                        on_click=move |_| state_inc.add_to_cart(&inc_id)
                                                    >
                                                        "+"
                                                    </Button>
                                                </div>
                                                <span class="w-16 text-right text-sm font-semibold">
                                                    {format!("${:.2}", line.total)}
                                                </span>
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Sm
                                                    on_click=move |_| state_drop.remove_cart_line(&drop_id)
                                                >
                                                    "✕"
                                                </Button>
                                            </li>
                                        }
                                    }).collect::<Vec<_>>()}
                                </ul>
                            }.into_any()
                        }
                    }}

                    // Payment method
                    <div class="flex gap-2">
                        {PaymentMethod::all().into_iter().map(|method| {
                            let is_selected = Signal::derive(move || payment_method.get() == method);
                            view! {
                                <button
                                    on:click=move |_| payment_method.set(method)
                                    class=move || format!(
                                        "flex-1 h-10 rounded-md text-sm font-medium border transition-colors {}",
                                        if is_selected.get() {
                                            "bg-blue-600 text-white border-blue-600"
                                        } else {
                                            "border-gray-300 text-gray-700 hover:bg-gray-100"
                                        }
                                    )
                                >
                                    {method.label()}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="flex items-center justify-between border-t pt-4">
                        <span class="text-base font-medium">"Total"</span>
                        <span class="text-2xl font-bold">
                            {move || format!("${:.2}", cart_total.get())}
                        </span>
                    </div>

                    <Button
                        class="w-full"
                        disabled=cart_empty
                        on_click=move |_| {
                            state_for_checkout.complete_sale(payment_method.get_untracked())
                        }
                    >
                        "Complete Sale"
                    </Button>
                </CardContent>
            </Card>
        </div>
    }
}
