//! Client-side application state.
//! Each slice is a plain struct with a pure `reduce`; the `Store` bundles one
//! `RwSignal` per slice and is shared through Leptos context.
use std::collections::HashSet;

use leptos::logging::{log, warn};
use leptos::*;

use crate::models::product::Product;
use crate::models::user::UserInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetailsState {
    pub loading: bool,
    pub error: Option<String>,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailsAction {
    Request,
    Success(Product),
    Fail(String),
    FeatureVoted { feature_id: String, votes: i64 },
}

impl ProductDetailsState {
    pub fn reduce(&mut self, action: ProductDetailsAction) {
        match action {
            // The previous product stays until the new one arrives.
            ProductDetailsAction::Request => self.loading = true,
            ProductDetailsAction::Success(product) => {
                self.loading = false;
                self.error = None;
                self.product = Some(product);
            }
            ProductDetailsAction::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ProductDetailsAction::FeatureVoted { feature_id, votes } => {
                if let Some(product) = self.product.as_mut() {
                    if !product.set_feature_votes(&feature_id, votes) {
                        warn!("[STORE] Vote receipt for unknown feature {}", feature_id);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewCreateState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewCreateAction {
    Request,
    Success,
    Fail(String),
    Reset,
}

impl ReviewCreateState {
    pub fn reduce(&mut self, action: ReviewCreateAction) {
        *self = match action {
            ReviewCreateAction::Request => Self { loading: true, ..Self::default() },
            ReviewCreateAction::Success => Self { success: true, ..Self::default() },
            ReviewCreateAction::Fail(message) => Self { error: Some(message), ..Self::default() },
            ReviewCreateAction::Reset => Self::default(),
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserLoginState {
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVoteState {
    /// Features whose vote is in flight.
    pub pending: HashSet<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureVoteAction {
    Request(String),
    Success(String),
    Fail { feature_id: String, message: String },
}

impl FeatureVoteState {
    pub fn reduce(&mut self, action: FeatureVoteAction) {
        match action {
            FeatureVoteAction::Request(feature_id) => {
                self.pending.insert(feature_id);
                self.error = None;
            }
            FeatureVoteAction::Success(feature_id) => {
                self.pending.remove(&feature_id);
            }
            FeatureVoteAction::Fail { feature_id, message } => {
                self.pending.remove(&feature_id);
                self.error = Some(message);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Store {
    pub product_details: RwSignal<ProductDetailsState>,
    pub user_login: RwSignal<UserLoginState>,
    pub review_create: RwSignal<ReviewCreateState>,
    pub feature_vote: RwSignal<FeatureVoteState>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            product_details: create_rw_signal(ProductDetailsState::default()),
            user_login: create_rw_signal(UserLoginState::default()),
            review_create: create_rw_signal(ReviewCreateState::default()),
            feature_vote: create_rw_signal(FeatureVoteState::default()),
        }
    }

    pub fn dispatch_product(&self, action: ProductDetailsAction) {
        self.product_details.update(|s| s.reduce(action));
    }

    pub fn dispatch_review(&self, action: ReviewCreateAction) {
        self.review_create.update(|s| s.reduce(action));
    }

    pub fn dispatch_vote(&self, action: FeatureVoteAction) {
        self.feature_vote.update(|s| s.reduce(action));
    }

    pub fn session(&self) -> Option<UserInfo> {
        self.user_login.with_untracked(|s| s.user_info.clone())
    }

    /// Loads the session saved by the login flow. Browser only.
    pub fn restore_session(&self) {
        let user_info = read_stored_session();
        log!("[STORE] Session restored: {}", user_info.is_some());
        self.user_login.set(UserLoginState { user_info });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_stored_session() -> Option<UserInfo> {
    use crate::models::user::{parse_session, SESSION_KEY};

    let storage = gloo_utils::window().local_storage().ok().flatten()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten();
    parse_session(raw.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored_session() -> Option<UserInfo> {
    None
}

pub fn provide_store() -> Store {
    let store = Store::new();
    provide_context(store);
    store
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
