use leptos::*;

pub const MAX_QTY: u32 = 10;

/// Path of the cart screen for `qty` units of a product.
pub fn cart_path(product_id: &str, qty: u32) -> String {
    format!("/cart/{}?qty={}", urlencoding::encode(product_id), qty)
}

/// Quantity from a `qty` query value; anything unusable means one.
pub fn parse_qty(raw: Option<&str>) -> u32 {
    raw.and_then(|q| q.trim().parse::<u32>().ok())
        .filter(|q| *q > 0)
        .unwrap_or(1)
}

#[component]
pub fn AddToCart(qty: RwSignal<u32>, on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="d-flex align-items-center gap-2">
            <label for="qty" class="form-label mb-0">{ "Qty" }</label>
            <select
                id="qty"
                class="form-select w-auto"
                prop:value=move || qty.get().to_string()
                on:change=move |e| qty.set(parse_qty(Some(&event_target_value(&e))))
            >
                {(1..=MAX_QTY).map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>
            <button type="button" class="btn btn-dark" on:click=move |_| on_add.call(())>
                { "Add To Cart" }
            </button>
        </div>
    }
}
