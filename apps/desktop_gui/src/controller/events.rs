//! Discrete input events produced while drawing a frame.

use shared::domain::{ArticleId, Rating};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    OpenArticle(ArticleId),
    Back,
    HoverStar { article_id: ArticleId, star: Rating },
    LeaveStars { article_id: ArticleId },
    ClickStar { article_id: ArticleId, star: Rating },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::OpenArticle(_) => "open_article",
            UiEvent::Back => "back",
            UiEvent::HoverStar { .. } => "hover_star",
            UiEvent::LeaveStars { .. } => "leave_stars",
            UiEvent::ClickStar { .. } => "click_star",
        }
    }
}

/// Turns this frame's pointer position over a star row into at most one hover event.
pub fn hover_transition(
    article_id: ArticleId,
    hovered_now: Option<Rating>,
    hovered_before: Option<Rating>,
) -> Option<UiEvent> {
    match (hovered_now, hovered_before) {
        (Some(star), before) if before != Some(star) => {
            Some(UiEvent::HoverStar { article_id, star })
        }
        (None, Some(_)) => Some(UiEvent::LeaveStars { article_id }),
        _ => None,
    }
}
