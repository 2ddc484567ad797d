use leptos::*;
use leptos_router::*;

use crate::components::add_to_cart::parse_qty;

/// Landing page of the add-to-cart navigation.
#[component]
pub fn CartScreen() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let qty = move || query.with(|q| parse_qty(q.get("qty").map(String::as_str)));

    view! {
        <div>
            <h1>{ "Shopping Cart" }</h1>
            <ul class="list-group list-group-flush">
                <li class="list-group-item">
                    <A href=move || format!("/product/{}", urlencoding::encode(&product_id()))>
                        { "Product " }{product_id}
                    </A>
                    <span class="ms-3">{ "Qty: " }{qty}</span>
                </li>
            </ul>
        </div>
    }
}
