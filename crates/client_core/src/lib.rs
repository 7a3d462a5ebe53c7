use shared::domain::{Article, ArticleId, Rating};
use tracing::{debug, warn};

pub mod catalog;
pub mod error;
pub mod ratings;
pub mod submitter;
pub mod transport;
pub mod view;

pub use catalog::Catalog;
pub use error::{EndpointError, RatingSubmitError};
pub use ratings::RatingStore;
pub use submitter::{PendingSubmission, RatingSubmitter};
pub use transport::{HttpRatingTransport, RatingTransport, DEFAULT_RATINGS_ENDPOINT};
pub use view::{ViewController, ViewState};

/// One star of a rating widget as a renderer needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCell {
    pub star: Rating,
    pub lit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarRow {
    pub article_id: ArticleId,
    pub display_value: u8,
    pub cells: Vec<StarCell>,
    pub aggregate_label: String,
}

/// Everything one reader's session owns: the article catalog, which screen is showing,
/// and the rating state. Front ends keep a single instance and route input events here.
pub struct BlogSession {
    catalog: Catalog,
    view: ViewController,
    ratings: RatingStore,
    submitter: RatingSubmitter,
}

impl BlogSession {
    pub fn new(catalog: Catalog, submitter: RatingSubmitter) -> Self {
        Self {
            catalog,
            view: ViewController::new(),
            ratings: RatingStore::new(),
            submitter,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    pub fn selected(&self) -> Option<&Article> {
        self.view.selected()
    }

    /// Returns `false` and leaves the view alone when `article_id` is not in the catalog.
    pub fn open_article(&mut self, article_id: ArticleId) -> bool {
        match self.catalog.get(article_id) {
            Some(article) => {
                self.view.open_article(article);
                true
            }
            None => {
                warn!(%article_id, "ignoring request to open unknown article");
                false
            }
        }
    }

    pub fn close_article(&mut self) {
        self.view.close_article();
    }

    pub fn hover_star(&mut self, article_id: ArticleId, star: Rating) {
        self.ratings.hover(article_id, star);
    }

    pub fn leave_stars(&mut self, article_id: ArticleId) {
        self.ratings.leave(article_id);
    }

    pub fn submit_rating(&mut self, article_id: ArticleId, rating: Rating) -> PendingSubmission {
        debug!(%article_id, %rating, "submitting rating");
        self.submitter.submit(&mut self.ratings, article_id, rating)
    }

    /// Whether the detail view should thank the reader for rating this article.
    pub fn has_rated(&self, article_id: ArticleId) -> bool {
        self.ratings.user_rating(article_id).is_some()
    }

    pub fn star_row(&self, article: &Article) -> StarRow {
        StarRow {
            article_id: article.id,
            display_value: self.ratings.display_value(article.id),
            cells: Rating::all()
                .map(|star| StarCell {
                    star,
                    lit: self.ratings.is_lit(article.id, star),
                })
                .collect(),
            aggregate_label: article.aggregate_label(),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
