//! Dashboard page: shop-wide stats at a glance.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::state::AppState;

/// Dashboard with stat cards, the low-stock list and recent sales.
/// Reads the in-memory collections only; never mutates them.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let product_count = {
        let state = state.clone();
        Signal::derive(move || state.products.with(|ps| ps.len()))
    };
    let low_stock_count = {
        let state = state.clone();
        Signal::derive(move || state.products.with(|ps| catalog::low_stock(ps).len()))
    };
    let sales_count = {
        let state = state.clone();
        Signal::derive(move || state.sales.with(|s| s.len()))
    };
    let revenue = {
        let state = state.clone();
        Signal::derive(move || {
            state
                .sales
                .with(|s| s.iter().map(|sale| sale.total_amount).sum::<f64>())
        })
    };

    let state_for_low = state.clone();
    let state_for_sales = state.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-6 space-y-6">
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard label="Products" value=Signal::derive(move || product_count.get().to_string()) />
                <StatCard
                    label="Low Stock"
                    value=Signal::derive(move || low_stock_count.get().to_string())
                    accent="text-yellow-600"
                />
                <StatCard label="Sales" value=Signal::derive(move || sales_count.get().to_string()) />
                <StatCard
                    label="Revenue"
                    value=Signal::derive(move || format!("${:.2}", revenue.get()))
                    accent="text-green-600"
                />
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                // Low stock warnings
                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Low Stock"</CardTitle>
                    </CardHeader>
                    <CardContent class="pt-0">
                        {move || {
                            let low: Vec<_> = state_for_low.products.with(|ps| {
                                catalog::low_stock(ps).into_iter().cloned().collect()
                            });
                            if low.is_empty() {
                                view! {
                                    <p class="text-sm text-gray-500">"All products are sufficiently stocked."</p>
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="divide-y">
                                        {low.into_iter().map(|p| view! {
                                            <li class="py-2 flex items-center justify-between">
                                                <span class="text-sm font-medium">{p.name.clone()}</span>
                                                <span class="text-sm text-yellow-600">
                                                    {p.stock} " left (min " {p.min_stock_level} ")"
                                                </span>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                }.into_any()
                            }
                        }}
                    </CardContent>
                </Card>

                // Recent sales
                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Recent Sales"</CardTitle>
                    </CardHeader>
                    <CardContent class="pt-0">
                        {move || {
                            let recent: Vec<_> = state_for_sales.sales.with(|sales| {
                                sales.iter().rev().take(5).cloned().collect()
                            });
                            if recent.is_empty() {
                                view! {
                                    <p class="text-sm text-gray-500">"No sales recorded yet."</p>
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="divide-y">
                                        {recent.into_iter().map(|sale| view! {
                                            <li class="py-2 flex items-center justify-between">
                                                <div>
                                                    <div class="text-sm font-medium">{sale.receipt_number.clone()}</div>
                                                    <div class="text-xs text-gray-500">
                                                        {sale.date.format("%Y-%m-%d %H:%M").to_string()}
                                                        " · "
                                                        {sale.payment_method.label()}
                                                    </div>
                                                </div>
                                                <span class="text-sm font-semibold">
                                                    {format!("${:.2}", sale.total_amount)}
                                                </span>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                }.into_any()
                            }
                        }}
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

/// Single stat tile.
#[component]
fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(default = "text-gray-900")] accent: &'static str,
) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="p-4">
                <p class="text-sm text-gray-500">{label}</p>
                <p class=format!("text-2xl font-semibold {}", accent)>{move || value.get()}</p>
            </CardContent>
        </Card>
    }
}
