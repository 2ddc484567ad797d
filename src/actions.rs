//! Action creators. Each one reduces a request into the store, talks to the
//! JSON API and reduces the outcome.
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use leptos::spawn_local;
use serde::de::DeserializeOwned;

use crate::error::{error_detail, AppError};
use crate::models::product::{Product, ProductSummary, VoteReceipt};
use crate::models::review::{Review, ReviewDraft};
use crate::store::{
    FeatureVoteAction, ProductDetailsAction, ReviewCreateAction, Store,
};

pub fn product_url(id: &str) -> String {
    format!("/api/products/{}", urlencoding::encode(id))
}

pub fn reviews_url(id: &str) -> String {
    format!("{}/reviews", product_url(id))
}

pub fn vote_url(product_id: &str, feature_id: &str) -> String {
    format!(
        "{}/features/{}/vote",
        product_url(product_id),
        urlencoding::encode(feature_id)
    )
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()));
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Api {
        status,
        detail: error_detail(status, &body),
    })
}

pub async fn fetch_products() -> Result<Vec<ProductSummary>, AppError> {
    let response = Request::get("/api/products").send().await?;
    decode(response).await
}

pub async fn fetch_product(id: &str) -> Result<Product, AppError> {
    let response = Request::get(&product_url(id)).send().await?;
    decode(response).await
}

pub async fn post_review(
    id: &str,
    draft: &ReviewDraft,
    bearer: Option<String>,
) -> Result<Review, AppError> {
    let mut request = Request::post(&reviews_url(id));
    if let Some(bearer) = bearer {
        request = request.header("Authorization", &bearer);
    }
    let response = request.json(draft)?.send().await?;
    decode(response).await
}

pub async fn post_vote(
    product_id: &str,
    feature_id: &str,
    bearer: Option<String>,
) -> Result<VoteReceipt, AppError> {
    let mut request = Request::post(&vote_url(product_id, feature_id));
    if let Some(bearer) = bearer {
        request = request.header("Authorization", &bearer);
    }
    let response = request.send().await?;
    decode(response).await
}

pub fn list_product_details(store: Store, id: String) {
    log!("[ACTIONS] Loading product {}", id);
    store.dispatch_product(ProductDetailsAction::Request);
    spawn_local(async move {
        match fetch_product(&id).await {
            Ok(product) => store.dispatch_product(ProductDetailsAction::Success(product)),
            Err(err) => {
                warn!("[ACTIONS] Loading product {} failed: {}", id, err);
                store.dispatch_product(ProductDetailsAction::Fail(err.to_string()));
            }
        }
    });
}

pub fn create_product_review(store: Store, id: String, draft: ReviewDraft) {
    log!("[ACTIONS] Submitting review for {} (rating {})", id, draft.rating);
    store.dispatch_review(ReviewCreateAction::Request);
    let bearer = store.session().map(|user| user.bearer());
    spawn_local(async move {
        match post_review(&id, &draft, bearer).await {
            Ok(review) => {
                log!("[ACTIONS] Review {} created", review.id);
                store.dispatch_review(ReviewCreateAction::Success);
            }
            Err(err) => {
                warn!("[ACTIONS] Review for {} rejected: {}", id, err);
                store.dispatch_review(ReviewCreateAction::Fail(err.to_string()));
            }
        }
    });
}

pub fn vote_feature(store: Store, product_id: String, feature_id: String) {
    store.dispatch_vote(FeatureVoteAction::Request(feature_id.clone()));
    let bearer = store.session().map(|user| user.bearer());
    spawn_local(async move {
        match post_vote(&product_id, &feature_id, bearer).await {
            Ok(receipt) => {
                store.dispatch_product(ProductDetailsAction::FeatureVoted {
                    feature_id: receipt.id,
                    votes: receipt.votes,
                });
                store.dispatch_vote(FeatureVoteAction::Success(feature_id));
            }
            Err(err) => {
                warn!("[ACTIONS] Vote for {} failed: {}", feature_id, err);
                store.dispatch_vote(FeatureVoteAction::Fail {
                    feature_id,
                    message: err.to_string(),
                });
            }
        }
    });
}
