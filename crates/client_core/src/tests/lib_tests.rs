use super::*;
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use shared::protocol::RatingSubmission;
use tokio::{net::TcpListener, sync::Mutex};

struct RecordingTransport {
    sent: Mutex<Vec<RatingSubmission>>,
    fail_status: Option<u16>,
}

impl RecordingTransport {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_status: None,
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_status: Some(status),
        })
    }

    async fn sent(&self) -> Vec<RatingSubmission> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl RatingTransport for RecordingTransport {
    async fn post_rating(&self, submission: &RatingSubmission) -> Result<(), RatingSubmitError> {
        self.sent.lock().await.push(*submission);
        match self.fail_status {
            Some(status) => Err(RatingSubmitError::Status { status }),
            None => Ok(()),
        }
    }
}

fn session_with(transport: Arc<dyn RatingTransport>) -> BlogSession {
    BlogSession::new(
        Catalog::seeded(),
        RatingSubmitter::on_current_runtime(transport),
    )
}

fn star(value: u8) -> Rating {
    Rating::new(value).expect("valid star")
}

fn lit_count(session: &BlogSession, article_id: ArticleId) -> usize {
    let article = session
        .catalog()
        .get(article_id)
        .cloned()
        .expect("known article");
    session
        .star_row(&article)
        .cells
        .iter()
        .filter(|cell| cell.lit)
        .count()
}

#[derive(Clone)]
struct CaptureState {
    requests: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
    status: StatusCode,
}

async fn capture_rating(
    State(state): State<CaptureState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.requests.lock().await.push((content_type, body));
    state.status
}

async fn spawn_capture_server(status: StatusCode) -> (String, CaptureState) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = CaptureState {
        requests: Arc::new(Mutex::new(Vec::new())),
        status,
    };
    let app = Router::new()
        .route("/ratings", post(capture_rating))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/ratings"), state)
}

#[tokio::test]
async fn local_rating_is_set_regardless_of_transport_outcome() {
    for (transport, should_fail) in [
        (RecordingTransport::ok(), false),
        (RecordingTransport::failing(500), true),
    ] {
        let mut session = session_with(transport.clone());
        let ids: Vec<ArticleId> = session.catalog().articles().iter().map(|a| a.id).collect();

        for id in ids {
            for rating in Rating::all() {
                let pending = session.submit_rating(id, rating);
                assert_eq!(session.ratings().user_rating(id), Some(rating));

                let outcome = pending.outcome().await;
                assert_eq!(outcome.is_err(), should_fail);
                assert_eq!(session.ratings().user_rating(id), Some(rating));
            }
        }

        assert_eq!(transport.sent().await.len(), 15);
    }
}

#[tokio::test]
async fn highlighted_stars_follow_hover_and_revert() {
    let mut session = session_with(RecordingTransport::ok());
    let id = ArticleId(1);

    for value in [2, 5, 1, 3] {
        session.hover_star(id, star(value));
        assert_eq!(lit_count(&session, id), usize::from(value));
    }
    session.leave_stars(id);
    assert_eq!(lit_count(&session, id), 0);

    session
        .submit_rating(id, star(4))
        .outcome()
        .await
        .expect("submit");
    session.hover_star(id, star(1));
    assert_eq!(lit_count(&session, id), 1);
    session.leave_stars(id);
    assert_eq!(lit_count(&session, id), 4);
}

#[tokio::test]
async fn open_then_close_returns_to_listing() {
    let mut session = session_with(RecordingTransport::ok());
    assert!(session.open_article(ArticleId(3)));
    assert_eq!(session.selected().map(|a| a.id), Some(ArticleId(3)));

    session.close_article();
    assert_eq!(session.view().state(), &ViewState::Listing);
    assert!(session.selected().is_none());
}

#[tokio::test]
async fn unknown_article_does_not_change_view() {
    let mut session = session_with(RecordingTransport::ok());
    assert!(!session.open_article(ArticleId(404)));
    assert!(session.view().is_listing());
}

#[tokio::test]
async fn submitting_for_one_article_leaves_others_untouched() {
    let mut session = session_with(RecordingTransport::ok());
    session
        .submit_rating(ArticleId(1), star(2))
        .outcome()
        .await
        .expect("submit");
    session.hover_star(ArticleId(3), star(5));

    session
        .submit_rating(ArticleId(2), star(4))
        .outcome()
        .await
        .expect("submit");

    assert_eq!(session.ratings().user_rating(ArticleId(1)), Some(star(2)));
    assert_eq!(session.ratings().user_rating(ArticleId(3)), None);
    assert_eq!(session.ratings().hovered(ArticleId(3)), Some(star(5)));
    assert_eq!(session.ratings().submitted_count(), 2);
}

#[tokio::test]
async fn seeded_aggregate_is_not_recomputed_from_submissions() {
    let mut session = session_with(RecordingTransport::ok());
    session
        .submit_rating(ArticleId(1), star(1))
        .outcome()
        .await
        .expect("submit");

    let article = session
        .catalog()
        .get(ArticleId(1))
        .cloned()
        .expect("article");
    assert_eq!(article.rating, 4.5);
    assert_eq!(article.rating_count, 127);
    assert_eq!(session.star_row(&article).aggregate_label, "4.5 (127)");
    assert!(session.has_rated(ArticleId(1)));
    assert!(!session.has_rated(ArticleId(2)));
}

#[tokio::test]
async fn reader_hovers_leaves_and_rates_article_two_over_http() {
    let (endpoint, server) = spawn_capture_server(StatusCode::OK).await;
    let transport = HttpRatingTransport::parse(&endpoint).expect("endpoint");
    let mut session = session_with(Arc::new(transport));
    let id = ArticleId(2);

    assert!(session.open_article(id));
    session.hover_star(id, star(4));
    assert_eq!(lit_count(&session, id), 4);
    session.leave_stars(id);
    assert_eq!(lit_count(&session, id), 0);

    let pending = session.submit_rating(id, star(5));
    assert_eq!(session.ratings().user_rating(id), Some(star(5)));
    pending.outcome().await.expect("rating accepted");

    let requests = server.requests.lock().await.clone();
    assert_eq!(requests.len(), 1);
    let (content_type, body) = &requests[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, &serde_json::json!({ "article_id": 2, "rating": 5 }));
}

#[tokio::test]
async fn non_success_status_is_reported_but_local_rating_stays() {
    let (endpoint, server) = spawn_capture_server(StatusCode::SERVICE_UNAVAILABLE).await;
    let transport = HttpRatingTransport::parse(&endpoint).expect("endpoint");
    let mut session = session_with(Arc::new(transport));

    let outcome = session.submit_rating(ArticleId(1), star(3)).outcome().await;
    assert!(matches!(
        outcome,
        Err(RatingSubmitError::Status { status: 503 })
    ));
    assert_eq!(session.ratings().user_rating(ArticleId(1)), Some(star(3)));
    assert_eq!(server.requests.lock().await.len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_keeps_local_rating() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let transport =
        HttpRatingTransport::parse(&format!("http://{addr}/ratings")).expect("endpoint");
    let mut session = session_with(Arc::new(transport));

    let outcome = session.submit_rating(ArticleId(2), star(2)).outcome().await;
    assert!(matches!(outcome, Err(RatingSubmitError::Transport(_))));
    assert_eq!(session.ratings().user_rating(ArticleId(2)), Some(star(2)));
}

#[tokio::test]
async fn repeated_clicks_each_send_a_request() {
    let transport = RecordingTransport::ok();
    let mut session = session_with(transport.clone());
    let id = ArticleId(3);

    let pending: Vec<PendingSubmission> = [1, 2, 3]
        .into_iter()
        .map(|value| session.submit_rating(id, star(value)))
        .collect();
    assert_eq!(session.ratings().user_rating(id), Some(star(3)));

    for submission in pending {
        submission.outcome().await.expect("submit");
    }

    let mut sent: Vec<u8> = transport
        .sent()
        .await
        .iter()
        .map(|s| s.rating.value())
        .collect();
    sent.sort_unstable();
    assert_eq!(sent, vec![1, 2, 3]);
}

#[tokio::test]
async fn detached_submission_still_reaches_transport() {
    let transport = RecordingTransport::ok();
    let mut session = session_with(transport.clone());

    session.submit_rating(ArticleId(1), star(5)).detach();

    for _ in 0..100 {
        if !transport.sent().await.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let sent = transport.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].article_id, ArticleId(1));
}

#[test]
fn malformed_endpoint_is_rejected() {
    let err = HttpRatingTransport::parse("not a url").expect_err("should fail");
    assert_eq!(err.endpoint, "not a url");
}
