//! Two-screen view state: the article list, or one article open for reading.

use shared::domain::{Article, ArticleId};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Listing,
    Reading(Article),
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_article(&mut self, article: &Article) {
        debug!(article_id = %article.id, "opening article");
        self.state = ViewState::Reading(article.clone());
    }

    pub fn close_article(&mut self) {
        if let ViewState::Reading(article) = &self.state {
            debug!(article_id = %article.id, "closing article");
        }
        self.state = ViewState::Listing;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected(&self) -> Option<&Article> {
        match &self.state {
            ViewState::Listing => None,
            ViewState::Reading(article) => Some(article),
        }
    }

    pub fn selected_id(&self) -> Option<ArticleId> {
        self.selected().map(|article| article.id)
    }

    pub fn is_listing(&self) -> bool {
        matches!(self.state, ViewState::Listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn starts_in_listing() {
        let view = ViewController::new();
        assert_eq!(view.state(), &ViewState::Listing);
        assert!(view.selected().is_none());
    }

    #[test]
    fn open_then_close_leaves_no_reference() {
        let catalog = Catalog::seeded();
        let mut view = ViewController::new();
        for article in catalog.articles() {
            view.open_article(article);
            assert_eq!(view.selected_id(), Some(article.id));

            view.close_article();
            assert!(view.is_listing());
            assert!(view.selected().is_none());
        }
    }

    #[test]
    fn opening_another_article_replaces_selection() {
        let catalog = Catalog::seeded();
        let mut view = ViewController::new();
        view.open_article(&catalog.articles()[0]);
        view.open_article(&catalog.articles()[2]);
        assert_eq!(view.selected_id(), Some(catalog.articles()[2].id));
    }

    #[test]
    fn closing_while_listing_is_a_no_op() {
        let mut view = ViewController::new();
        view.close_article();
        assert_eq!(view.state(), &ViewState::Listing);
    }
}
