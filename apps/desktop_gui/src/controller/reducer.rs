use client_core::BlogSession;

use crate::controller::events::UiEvent;

pub fn apply(session: &mut BlogSession, event: UiEvent) {
    tracing::trace!(event = event.name(), "applying ui event");
    match event {
        UiEvent::OpenArticle(article_id) => {
            session.open_article(article_id);
        }
        UiEvent::Back => session.close_article(),
        UiEvent::HoverStar { article_id, star } => session.hover_star(article_id, star),
        UiEvent::LeaveStars { article_id } => session.leave_stars(article_id),
        UiEvent::ClickStar { article_id, star } => {
            // Failures are logged by the submitter and never shown to the reader.
            session.submit_rating(article_id, star).detach();
        }
    }
}

pub fn apply_all(session: &mut BlogSession, events: impl IntoIterator<Item = UiEvent>) -> usize {
    let mut applied = 0;
    for event in events {
        apply(session, event);
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use client_core::{Catalog, RatingSubmitError, RatingSubmitter, RatingTransport, ViewState};
    use shared::{
        domain::{ArticleId, Rating},
        protocol::RatingSubmission,
    };
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct FlakyTransport {
        sent: Mutex<Vec<RatingSubmission>>,
    }

    #[async_trait]
    impl RatingTransport for FlakyTransport {
        async fn post_rating(&self, submission: &RatingSubmission) -> Result<(), RatingSubmitError> {
            self.sent.lock().await.push(*submission);
            Err(RatingSubmitError::Status { status: 502 })
        }
    }

    fn star(value: u8) -> Rating {
        Rating::new(value).expect("valid star")
    }

    #[tokio::test]
    async fn click_on_card_star_rates_without_opening_article() {
        let transport = Arc::new(FlakyTransport::default());
        let mut session = BlogSession::new(
            Catalog::seeded(),
            RatingSubmitter::on_current_runtime(transport.clone()),
        );

        apply(
            &mut session,
            UiEvent::ClickStar {
                article_id: ArticleId(1),
                star: star(3),
            },
        );
        assert_eq!(session.view().state(), &ViewState::Listing);
        assert_eq!(session.ratings().user_rating(ArticleId(1)), Some(star(3)));

        for _ in 0..100 {
            if !transport.sent.lock().await.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(transport.sent.lock().await.len(), 1);
        assert_eq!(session.ratings().user_rating(ArticleId(1)), Some(star(3)));
    }

    #[tokio::test]
    async fn reading_flow_applies_events_in_order() {
        let mut session = BlogSession::new(
            Catalog::seeded(),
            RatingSubmitter::on_current_runtime(Arc::new(FlakyTransport::default())),
        );
        let id = ArticleId(2);

        apply_all(
            &mut session,
            [UiEvent::OpenArticle(id), UiEvent::HoverStar { article_id: id, star: star(4) }],
        );
        assert_eq!(session.selected().map(|a| a.id), Some(id));
        assert_eq!(session.ratings().display_value(id), 4);

        apply_all(
            &mut session,
            [
                UiEvent::LeaveStars { article_id: id },
                UiEvent::ClickStar { article_id: id, star: star(5) },
                UiEvent::Back,
            ],
        );
        assert_eq!(session.ratings().display_value(id), 5);
        assert!(session.view().is_listing());
    }
}
