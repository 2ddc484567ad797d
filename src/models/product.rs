use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::review::Review;

/// Product as served by `GET /api/products/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub feature_types: Vec<FeatureTag>,
    #[serde(default)]
    pub feature_statuses: Vec<FeatureTag>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub num_reviews: i64,
}

/// Entry of the product list on the home screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub num_reviews: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub votes: i64,
    /// Index into the product's feature types.
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    /// Index into the product's feature statuses.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

/// Named, coloured label. Feature types and feature statuses share this shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureTag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

pub type FeatureType = FeatureTag;
pub type FeatureStatus = FeatureTag;

/// Returned by the vote endpoint with the feature's new vote count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VoteReceipt {
    pub id: String,
    pub votes: i64,
}

/// Type and status tables of one product, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureLookup {
    types: HashMap<i64, FeatureType>,
    statuses: HashMap<i64, FeatureStatus>,
}

impl FeatureLookup {
    pub fn from_product(product: &Product) -> Self {
        Self {
            types: product
                .feature_types
                .iter()
                .map(|t| (t.id, t.clone()))
                .collect(),
            statuses: product
                .feature_statuses
                .iter()
                .map(|s| (s.id, s.clone()))
                .collect(),
        }
    }

    pub fn feature_type(&self, feature: &Feature) -> Option<&FeatureType> {
        feature.kind.and_then(|id| self.types.get(&id))
    }

    pub fn feature_status(&self, feature: &Feature) -> Option<&FeatureStatus> {
        feature.status.and_then(|id| self.statuses.get(&id))
    }
}

/// Features whose name contains `query` (case-insensitive) and, when
/// `type_filter` is set, whose type matches it. Order is preserved.
pub fn filter_features(features: &[Feature], query: &str, type_filter: Option<i64>) -> Vec<Feature> {
    let needle = query.trim().to_lowercase();
    features
        .iter()
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .filter(|f| type_filter.map_or(true, |t| f.kind == Some(t)))
        .cloned()
        .collect()
}

impl Product {
    /// Sets the vote count of one feature. Returns false if the feature is not on this product.
    pub fn set_feature_votes(&mut self, feature_id: &str, votes: i64) -> bool {
        match self.features.iter_mut().find(|f| f.id == feature_id) {
            Some(feature) => {
                feature.votes = votes;
                true
            }
            None => false,
        }
    }
}
