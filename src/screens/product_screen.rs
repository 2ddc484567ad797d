use leptos::logging::log;
use leptos::*;
use leptos_router::*;

use crate::actions;
use crate::components::{
    add_to_cart::{cart_path, AddToCart},
    feature_list::FeatureList,
    loader::Loader,
    message::Message,
    product_header::ProductHeader,
    review_form::ReviewForm,
    reviews_list::ReviewsList,
};
use crate::models::product::{filter_features, Feature, FeatureLookup, Product};
use crate::models::review::ReviewDraft;
use crate::store::{use_store, ReviewCreateAction};

/// Product page for the product in the route, wired to the store's actions.
#[component]
pub fn ProductScreen() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let product_id = Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let load = Callback::new(move |id: String| actions::list_product_details(store, id));
    let submit_review = Callback::new(move |draft: ReviewDraft| {
        actions::create_product_review(store, product_id.get_untracked(), draft);
    });
    let vote = Callback::new(move |feature_id: String| {
        actions::vote_feature(store, product_id.get_untracked(), feature_id);
    });

    view! {
        <ProductPage product_id=product_id on_load=load on_submit_review=submit_review on_vote=vote />
    }
}

/// What the page shows for the product-details slice. Vote counts are not
/// part of it, so a vote never remounts the page body.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Failed(String),
    Ready,
}

/// Header, feature board and reviews of one product, driven by the store.
#[component]
pub fn ProductPage(
    #[prop(into)] product_id: Signal<String>,
    /// Fetches the product into the store.
    on_load: Callback<String>,
    on_submit_review: Callback<ReviewDraft>,
    /// Votes for a feature of this product.
    on_vote: Callback<String>,
) -> impl IntoView {
    let store = use_store();

    let qty = create_rw_signal(1u32);
    let rating = create_rw_signal(0u8);
    let comment = create_rw_signal(String::new());
    let search = create_rw_signal(String::new());
    let type_filter = create_rw_signal(None::<i64>);

    let review_success = create_memo(move |_| store.review_create.with(|s| s.success));

    // Re-runs on navigation to another product and whenever the review
    // success flag flips, which refetches the product with its new review.
    create_effect(move |_| {
        let id = product_id.get();
        if review_success.get() {
            rating.set(0);
            comment.set(String::new());
            store.dispatch_review(ReviewCreateAction::Reset);
        }
        on_load.call(id);
    });

    let navigate = use_navigate();
    let add_to_cart = Callback::new(move |()| {
        let path = cart_path(&product_id.get_untracked(), qty.get_untracked());
        log!("[PRODUCT] Navigating to {}", path);
        navigate(&path, Default::default());
    });

    let submit_review = Callback::new(move |()| {
        on_submit_review.call(ReviewDraft {
            rating: i64::from(rating.get_untracked()),
            comment: comment.get_untracked(),
        });
    });

    let phase = create_memo(move |_| {
        store.product_details.with(|d| {
            if d.loading {
                Phase::Loading
            } else if let Some(error) = &d.error {
                Phase::Failed(error.clone())
            } else if d.product.is_some() {
                Phase::Ready
            } else {
                Phase::Idle
            }
        })
    });
    let features = create_memo(move |_| {
        store
            .product_details
            .with(|d| d.product.as_ref().map(|p| p.features.clone()).unwrap_or_default())
    });

    let body = move || match phase.get() {
        Phase::Loading => view! { <Loader /> }.into_view(),
        Phase::Failed(error) => view! { <Message variant="danger">{error}</Message> }.into_view(),
        Phase::Ready => store
            .product_details
            .with_untracked(|d| d.product.clone())
            .map(|product| {
                view! {
                    <ProductBody
                        product=product
                        features=features
                        qty=qty
                        rating=rating
                        comment=comment
                        search=search
                        type_filter=type_filter
                        on_add_to_cart=add_to_cart
                        on_submit_review=submit_review
                        on_vote=on_vote
                    />
                }
            })
            .into_view(),
        Phase::Idle => ().into_view(),
    };

    view! {
        <div>
            <A href="/" class="btn btn-light my-3">{ "Go Back" }</A>
            {body}
        </div>
    }
}

#[component]
fn ProductBody(
    product: Product,
    /// Live feature list, votes included.
    features: Memo<Vec<Feature>>,
    qty: RwSignal<u32>,
    rating: RwSignal<u8>,
    comment: RwSignal<String>,
    search: RwSignal<String>,
    type_filter: RwSignal<Option<i64>>,
    on_add_to_cart: Callback<()>,
    on_submit_review: Callback<()>,
    on_vote: Callback<String>,
) -> impl IntoView {
    let store = use_store();
    let lookup = FeatureLookup::from_product(&product);
    let feature_types = product.feature_types.clone();
    let reviews = product.reviews.clone();

    let voting = Signal::derive(move || store.feature_vote.with(|s| s.pending.clone()));
    let review_loading = Signal::derive(move || store.review_create.with(|s| s.loading));

    let feature_board = move || {
        // The empty-board message is only for products without features, not for empty searches.
        let shown = features.with(|all| {
            if all.is_empty() {
                Vec::new()
            } else {
                filter_features(all, &search.get(), type_filter.get())
            }
        });
        view! {
            <FeatureList features=shown lookup=lookup.clone() voting=voting on_vote=on_vote />
        }
    };

    view! {
        <div>
            <ProductHeader product=product />
            <div class="row px-5 mt-4">
                <div class="col">
                    <AddToCart qty=qty on_add=on_add_to_cart />
                </div>
            </div>
            <div class="row px-5 mt-4">
                <div class="col w-50">
                    <div class="input-group mb-3">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Search"
                            aria-label="Search"
                            prop:value=move || search.get()
                            on:input=move |e| search.set(event_target_value(&e))
                        />
                        <span class="input-group-text"><i class="fas fa-search"></i></span>
                    </div>
                </div>
                <div class="col">
                    <select
                        class="form-select"
                        aria-label="Feature type"
                        prop:value=move || type_filter.get().map(|t| t.to_string()).unwrap_or_default()
                        on:change=move |e| type_filter.set(event_target_value(&e).parse::<i64>().ok())
                    >
                        <option value="">{ "All types" }</option>
                        {feature_types.into_iter().map(|t| view! {
                            <option value=t.id.to_string()>{t.name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            {move || store.feature_vote.with(|s| s.error.clone()).map(|error| view! {
                <div class="px-5"><Message variant="danger">{error}</Message></div>
            })}
            <div class="d-flex justify-content-center">
                <div class="row w-100 px-5 py-5">
                    <div class="col px-5">{feature_board}</div>
                </div>
            </div>
            <div class="row">
                <div class="col-md-6">
                    <h4>{ "Reviews" }</h4>
                    <ReviewsList reviews=reviews />
                    <div class="list-group-item">
                        <h4>{ "Write a review" }</h4>
                        <Show when=move || review_loading.get()>
                            <Loader />
                        </Show>
                        <Show when=move || store.review_create.with(|s| s.success)>
                            <Message variant="success">{ "Review Submitted" }</Message>
                        </Show>
                        {move || store.review_create.with(|s| s.error.clone()).map(|error| view! {
                            <Message variant="danger">{error}</Message>
                        })}
                        <Show
                            when=move || store.user_login.with(|s| s.user_info.is_some())
                            fallback=|| view! {
                                <Message variant="info">
                                    { "Please " }<A href="/login">{ "login" }</A>{ " to write a review" }
                                </Message>
                            }
                        >
                            <ReviewForm
                                rating=rating
                                comment=comment
                                disabled=review_loading
                                on_submit=on_submit_review
                            />
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
