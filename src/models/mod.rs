pub mod product;
pub mod review;
pub mod user;

use serde::{Deserialize, Serialize};

/// Body of every API error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}
