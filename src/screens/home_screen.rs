use leptos::*;
use leptos_router::*;

use crate::actions;
use crate::components::{loader::Loader, message::Message, rating::Rating};
use crate::models::product::ProductSummary;

#[component]
pub fn HomeScreen() -> impl IntoView {
    // Errors are kept as their display text so the resource value stays `Clone`.
    let products = create_local_resource(
        || (),
        |_| async move { actions::fetch_products().await.map_err(|e| e.to_string()) },
    );

    view! {
        <div>
            <h1>{ "Products" }</h1>
            <Transition fallback=|| view! { <Loader /> }>
                {move || products.get().map(|result| view! { <ProductGrid result=result /> })}
            </Transition>
        </div>
    }
}

/// Product cards, "No Products", or the load error.
#[component]
pub fn ProductGrid(result: Result<Vec<ProductSummary>, String>) -> impl IntoView {
    match result {
        Ok(list) if list.is_empty() => view! {
            <Message variant="info">{ "No Products" }</Message>
        }
        .into_view(),
        Ok(list) => view! {
            <div class="row">
                {list.into_iter().map(|p| view! { <ProductCard product=p /> }).collect_view()}
            </div>
        }
        .into_view(),
        Err(detail) => view! { <Message variant="danger">{detail}</Message> }.into_view(),
    }
}

#[component]
fn ProductCard(product: ProductSummary) -> impl IntoView {
    let href = format!("/product/{}", urlencoding::encode(&product.id));
    let text = format!("{} reviews", product.num_reviews);
    view! {
        <div class="col-sm-12 col-md-6 col-lg-4 my-3" data-product-id=product.id.clone()>
            <div class="card p-3 rounded">
                <A href=href>
                    <h3 class="card-title text-capitalize">{product.name}</h3>
                </A>
                <p class="card-text">{product.description.unwrap_or_default()}</p>
                <Rating value=product.rating.unwrap_or_default() text=text />
            </div>
        </div>
    }
}
