//! Per-article rating state held by the client: the user's own submissions and the
//! star currently under the pointer. Neither is persisted.

use std::collections::HashMap;

use shared::domain::{ArticleId, Rating};

#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    submitted: HashMap<ArticleId, Rating>,
    hovered: HashMap<ArticleId, Rating>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_rating(&self, article_id: ArticleId) -> Option<Rating> {
        self.submitted.get(&article_id).copied()
    }

    /// Only a later `record` for the same article replaces this value.
    pub fn record(&mut self, article_id: ArticleId, rating: Rating) {
        self.submitted.insert(article_id, rating);
    }

    pub fn hovered(&self, article_id: ArticleId) -> Option<Rating> {
        self.hovered.get(&article_id).copied()
    }

    pub fn hover(&mut self, article_id: ArticleId, star: Rating) {
        self.hovered.insert(article_id, star);
    }

    pub fn leave(&mut self, article_id: ArticleId) {
        self.hovered.remove(&article_id);
    }

    /// Hovered star if any, else the submitted rating, else 0.
    pub fn display_value(&self, article_id: ArticleId) -> u8 {
        self.hovered(article_id)
            .or_else(|| self.user_rating(article_id))
            .map(Rating::value)
            .unwrap_or(0)
    }

    pub fn is_lit(&self, article_id: ArticleId, star: Rating) -> bool {
        star.value() <= self.display_value(article_id)
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted.len()
    }
}
