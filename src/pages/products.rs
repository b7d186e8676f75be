//! Products page: searchable catalog with add/edit/delete and export.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::{self, ProductDraft};
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Label, TextInput,
};
use crate::state::AppState;
use crate::types::Product;

/// Catalog management view.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let query = RwSignal::new(String::new());
    // Some(draft) while the add/edit form is open.
    let editing = RwSignal::new(Option::<ProductDraft>::None);

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

    let export = {
        let state = state.clone();
        move |_| {
            let json = state.products.with_untracked(|ps| catalog::export_json(ps));
            download_json("products.json", &json);
            tracing::info!("catalog exported");
        }
    };

    let state_for_form = state.clone();
    let state_for_rows = state.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-6 space-y-4">
            <div class="flex flex-col sm:flex-row gap-3 sm:items-center sm:justify-between">
                <div class="w-full sm:max-w-xs">
                    <TextInput value=query placeholder="Search name, barcode or category" />
                </div>
                <div class="flex gap-2">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on_click=export>
                        "Export"
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        on_click=move |_| editing.set(Some(ProductDraft::default()))
                    >
                        "+ Add Product"
                    </Button>
                </div>
            </div>

            {move || editing.get().map(|draft| {
                let state = state_for_form.clone();
                view! {
                    <ProductForm
                        draft=draft
                        on_save=Callback::new({
                            let state = state.clone();
                            move |draft: ProductDraft| {
                                if state.save_product(&draft) {
                                    editing.set(None);
                                }
                            }
                        })
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                }
            })}

            <Card>
                <CardContent class="p-0">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b text-left text-gray-500">
                                <th class="px-4 py-3 font-medium">"Product"</th>
                                <th class="px-4 py-3 font-medium hidden md:table-cell">"Barcode"</th>
                                <th class="px-4 py-3 font-medium">"Category"</th>
                                <th class="px-4 py-3 font-medium text-right">"Price"</th>
                                <th class="px-4 py-3 font-medium text-right">"Stock"</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let state = state_for_rows.clone();
                                filtered.get().into_iter().map(|product| {
                                    view! { <ProductRow product=product editing=editing state=state.clone() /> }
                                }).collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    {move || filtered.get().is_empty().then(|| view! {
                        <p class="p-6 text-sm text-gray-500 text-center">"No products match."</p>
                    })}
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, editing: RwSignal<Option<ProductDraft>>, state: AppState) -> impl IntoView {
    let draft = ProductDraft::from_product(&product);
    let id = product.id.clone();

    view! {
        <tr class="border-b last:border-0 hover:bg-gray-50">
            <td class="px-4 py-3">
                <div class="font-medium">{product.name.clone()}</div>
                <div class="text-xs text-gray-500">{product.description.clone()}</div>
            </td>
            <td class="px-4 py-3 hidden md:table-cell text-gray-500">{product.barcode.clone()}</td>
            <td class="px-4 py-3">{product.category.clone()}</td>
            <td class="px-4 py-3 text-right">{format!("${:.2}", product.selling_price)}</td>
            <td class="px-4 py-3 text-right">
                {product.stock}
                {product.is_low_stock().then(|| view! {
                    <span class="ml-2 text-xs rounded-full bg-yellow-100 text-yellow-800 px-2 py-0.5">
                        "low"
                    </span>
                })}
            </td>
            <td class="px-4 py-3 text-right whitespace-nowrap">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on_click=move |_| editing.set(Some(draft.clone()))
                >
                    "Edit"
                </Button>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    on_click=move |_| state.delete_product(&id)
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}

/// Add/edit form over a [`ProductDraft`]. Field values stay strings
/// until saved; validation errors surface as notifications.
#[component]
fn ProductForm(
    draft: ProductDraft,
    on_save: Callback<ProductDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = draft.id.clone();
    let is_edit = id.is_some();

    let name = RwSignal::new(draft.name);
    let barcode = RwSignal::new(draft.barcode);
    let category = RwSignal::new(draft.category);
    let supplier_id = RwSignal::new(draft.supplier_id);
    let purchase_price = RwSignal::new(draft.purchase_price);
    let selling_price = RwSignal::new(draft.selling_price);
    let stock = RwSignal::new(draft.stock);
    let min_stock_level = RwSignal::new(draft.min_stock_level);
    let description = RwSignal::new(draft.description);

    let save = move |_| {
        on_save.run(ProductDraft {
            id: id.clone(),
            name: name.get_untracked(),
            barcode: barcode.get_untracked(),
            category: category.get_untracked(),
            supplier_id: supplier_id.get_untracked(),
            purchase_price: purchase_price.get_untracked(),
            selling_price: selling_price.get_untracked(),
            stock: stock.get_untracked(),
            min_stock_level: min_stock_level.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-lg">
                    {if is_edit { "Edit Product" } else { "Add Product" }}
                </CardTitle>
            </CardHeader>
            <CardContent class="pt-0 grid sm:grid-cols-2 gap-4">
                <div>
                    <Label html_for="product-name">"Name"</Label>
                    <TextInput id="product-name" value=name placeholder="Product name" />
                </div>
                <div>
                    <Label html_for="product-barcode">"Barcode"</Label>
                    <TextInput id="product-barcode" value=barcode placeholder="EAN-13" />
                </div>
                <div>
                    <Label html_for="product-category">"Category"</Label>
                    <TextInput id="product-category" value=category placeholder="e.g. Dairy" />
                </div>
                <div>
                    <Label html_for="product-supplier">"Supplier ID"</Label>
                    <TextInput id="product-supplier" value=supplier_id />
                </div>
                <div>
                    <Label html_for="product-purchase">"Purchase price"</Label>
                    <TextInput id="product-purchase" value=purchase_price placeholder="0.00" />
                </div>
                <div>
                    <Label html_for="product-selling">"Selling price"</Label>
                    <TextInput id="product-selling" value=selling_price placeholder="0.00" />
                </div>
                <div>
                    <Label html_for="product-stock">"Stock"</Label>
                    <TextInput id="product-stock" value=stock placeholder="0" />
                </div>
                <div>
                    <Label html_for="product-min-stock">"Min stock level"</Label>
                    <TextInput id="product-min-stock" value=min_stock_level placeholder="0" />
                </div>
                <div class="sm:col-span-2">
                    <Label html_for="product-description">"Description"</Label>
                    <TextInput id="product-description" value=description />
                </div>
                <div class="sm:col-span-2 flex gap-2 justify-end">
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button size=ButtonSize::Sm on_click=save>
                        {if is_edit { "Save Changes" } else { "Add Product" }}
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}

/// Offer a string as a browser download via a Blob object URL.
fn download_json(filename: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(anchor) = document
        .create_element("a")
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|e| e.into()))
    {
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}
