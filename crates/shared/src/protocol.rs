use serde::{Deserialize, Serialize};

use crate::domain::{ArticleId, Rating};

/// Body of the rating POST: `{"article_id": 2, "rating": 5}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    pub article_id: ArticleId,
    pub rating: Rating,
}

/// Loosely typed form of [`RatingSubmission`] as the endpoint receives it, before
/// validation. Missing fields deserialize as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRatingSubmission {
    #[serde(default)]
    pub article_id: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
}

impl From<RatingSubmission> for RawRatingSubmission {
    fn from(value: RatingSubmission) -> Self {
        Self {
            article_id: Some(value.article_id.0),
            rating: Some(i64::from(value.rating.value())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingQuery {
    #[serde(default)]
    pub article_id: Option<String>,
}

/// Stored rating for an article; `0` when nothing has been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingResponse {
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRatingResponse {
    pub rating: u8,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn ratings_route() -> &'static str {
    "/ratings"
}
