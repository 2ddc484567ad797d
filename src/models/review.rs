// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub product: Option<String>, // ID of the reviewed product
    #[serde(default)]
    pub user: Option<i64>, // ID of the author
    #[serde(default)]
    pub name: Option<String>, // Author display name
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String, // RFC 3339
}

impl Review {
    /// Date part of the creation timestamp.
    pub fn date(&self) -> String {
        review_date(&self.created_at)
    }
}

/// Review body posted by the review form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        match self.rating {
            0 => Err(DraftError::MissingRating),
            1..=5 => Ok(()),
            // Negative and oversized ratings alike.
            _ => Err(DraftError::RatingOutOfRange),
        }
    }
}

/// Options of the rating select, in display order.
pub const RATING_OPTIONS: [(u8, &str); 5] = [
    (1, "Poor"),
    (2, "Fair"),
    (3, "Good"),
    (4, "Very Good"),
    (5, "Excellent"),
];

/// First ten characters of a timestamp (`YYYY-MM-DD` for RFC 3339).
pub fn review_date(created_at: &str) -> String {
    created_at.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_date_keeps_day_part() {
        assert_eq!(review_date("2021-06-14T08:31:22.123456Z"), "2021-06-14");
        assert_eq!(review_date("2021"), "2021");
        assert_eq!(review_date(""), "");
    }

    #[test]
    fn review_date_counts_chars_not_bytes() {
        assert_eq!(review_date("ÄÄÄÄÄÄÄÄÄÄÄÄ"), "ÄÄÄÄÄÄÄÄÄÄ");
    }

    #[test]
    fn draft_validation() {
        let mut draft = ReviewDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingRating));
        draft.rating = 4;
        assert_eq!(draft.validate(), Ok(()));
        draft.rating = 6;
        assert_eq!(draft.validate(), Err(DraftError::RatingOutOfRange));
        draft.rating = 300;
        assert_eq!(draft.validate(), Err(DraftError::RatingOutOfRange));
        draft.rating = -1;
        assert_eq!(draft.validate(), Err(DraftError::RatingOutOfRange));
    }

    #[test]
    fn review_uses_underscore_id_on_the_wire() {
        let json = r#"{"_id": 3, "name": "Ann", "rating": 5, "comment": "Great",
                       "createdAt": "2021-06-14T08:31:22Z", "product": "p1", "user": 2}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, 3);
        assert_eq!(review.date(), "2021-06-14");

        let back = serde_json::to_value(&review).unwrap();
        assert_eq!(back["_id"], 3);
        assert_eq!(back["createdAt"], "2021-06-14T08:31:22Z");
    }
}
