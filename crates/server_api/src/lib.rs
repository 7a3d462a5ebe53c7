use std::{collections::HashMap, sync::Arc};

use shared::{
    domain::{ArticleId, Rating},
    error::ApiError,
    protocol::{RatingQuery, RatingResponse, RawRatingSubmission, SaveRatingResponse},
};
use tokio::sync::RwLock;
use tracing::debug;

/// One stored rating per article; a later save for the same article replaces the earlier one.
/// Lives in process memory only.
#[derive(Clone, Default)]
pub struct RatingBook {
    ratings: Arc<RwLock<HashMap<ArticleId, Rating>>>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert(&self, article_id: ArticleId, rating: Rating) -> Rating {
        self.ratings.write().await.insert(article_id, rating);
        rating
    }

    pub async fn get(&self, article_id: ArticleId) -> Option<Rating> {
        self.ratings.read().await.get(&article_id).copied()
    }

    pub async fn len(&self) -> usize {
        self.ratings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ratings.read().await.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct ApiContext {
    pub ratings: RatingBook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: &'static str,
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
    pub max_age_seconds: u32,
}

pub const RATINGS_CORS: CorsPolicy = CorsPolicy {
    allow_origin: "*",
    allow_methods: "GET, POST, OPTIONS",
    allow_headers: "Content-Type",
    max_age_seconds: 86_400,
};

pub async fn get_rating(ctx: &ApiContext, query: &RatingQuery) -> Result<RatingResponse, ApiError> {
    let article_id = query
        .article_id
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<i64>().ok())
        .map(ArticleId)
        .ok_or_else(|| ApiError::validation("article_id required"))?;

    let rating = ctx
        .ratings
        .get(article_id)
        .await
        .map(Rating::value)
        .unwrap_or(0);
    Ok(RatingResponse { rating })
}

pub async fn save_rating(
    ctx: &ApiContext,
    submission: RawRatingSubmission,
) -> Result<SaveRatingResponse, ApiError> {
    // Zero counts as missing for both fields.
    let (Some(article_id), Some(raw_rating)) = (
        submission.article_id.filter(|id| *id != 0),
        submission.rating.filter(|rating| *rating != 0),
    ) else {
        return Err(ApiError::validation("article_id and rating required"));
    };

    let rating = Rating::try_from(raw_rating)
        .map_err(|_| ApiError::validation("rating must be between 1 and 5"))?;

    let stored = ctx.ratings.upsert(ArticleId(article_id), rating).await;
    debug!(article_id, rating = stored.value(), "stored article rating");

    Ok(SaveRatingResponse {
        rating: stored.value(),
        success: true,
    })
}
