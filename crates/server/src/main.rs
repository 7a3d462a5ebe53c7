use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use server_api::{get_rating, save_rating, ApiContext, RATINGS_CORS};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{
        ratings_route, ErrorBody, RatingQuery, RatingResponse, RawRatingSubmission,
        SaveRatingResponse,
    },
};
use tower_http::{limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_BODY_BYTES: usize = 16 * 1024;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let state = AppState {
        api: ApiContext::default(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "ratings server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            ratings_route(),
            get(http_get_rating)
                .post(http_save_rating)
                .options(ratings_preflight)
                .fallback(method_not_allowed),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(RATINGS_CORS.allow_origin),
        ))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn ratings_preflight() -> impl IntoResponse {
    let headers: [(HeaderName, HeaderValue); 4] = [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(RATINGS_CORS.allow_origin),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(RATINGS_CORS.allow_methods),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(RATINGS_CORS.allow_headers),
        ),
        (
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from(RATINGS_CORS.max_age_seconds),
        ),
    ];
    (StatusCode::OK, headers)
}

async fn http_get_rating(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RatingQuery>,
) -> ApiResult<RatingResponse> {
    get_rating(&state.api, &query)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn http_save_rating(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<SaveRatingResponse> {
    let submission = if body.iter().all(u8::is_ascii_whitespace) {
        RawRatingSubmission::default()
    } else {
        serde_json::from_slice::<RawRatingSubmission>(&body).map_err(|err| {
            error_response(ApiError::validation(format!("invalid JSON body: {err}")))
        })?
    };

    save_rating(&state.api, submission)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    error_response(ApiError::new(
        ErrorCode::MethodNotAllowed,
        "Method not allowed",
    ))
}

fn error_response(err: ApiError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err.code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err.body()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
