use leptos::*;
use crate::models::product::Product;

#[component]
pub fn ProductHeader(product: Product) -> impl IntoView {
    let background = product.secondary_color.clone().unwrap_or_default();
    let primary = product.primary_color.clone().unwrap_or_default();
    let name = product.name.clone();

    let badge = match product.logo.clone().filter(|logo| !logo.is_empty()) {
        Some(logo) => view! {
            <img src=logo class="img-fluid rounded-circle h-50" alt=name.clone() />
        }
        .into_view(),
        // No logo: a circle in the product's primary colour.
        None => view! {
            <span style=format!("background: {}", primary) class="product-circle"></span>
        }
        .into_view(),
    };

    view! {
        <div class="row py-5" style=format!("background: {}", background)>
            <div class="col-sm-12 col-md-2 col-lg-2 mt-4">{badge}</div>
            <div class="col-sm-12 col-md-8 col-lg-8 text-start">
                <h1 class="text-capitalize">{name}</h1>
                <p class="lead">{product.description.unwrap_or_default()}</p>
            </div>
            <div class="col-sm-12 col-md-2 col-lg-2 float-end mt-4">
                <a class="text-dark text-decoration-none" href=product.website_url.unwrap_or_default()>
                    <i class="fas fa-external-link-alt"></i>
                    { " Website" }
                </a>
            </div>
        </div>
    }
}
