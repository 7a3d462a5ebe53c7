use thiserror::Error;

/// Why a rating did not reach the endpoint. Never surfaced to the reader; the submitter
/// logs it and local state is left as it was.
#[derive(Debug, Error)]
pub enum RatingSubmitError {
    #[error("rating request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("rating endpoint answered with status {status}")]
    Status { status: u16 },
    #[error("rating task did not complete: {0}")]
    Aborted(String),
}

#[derive(Debug, Error)]
#[error("invalid ratings endpoint '{endpoint}': {source}")]
pub struct EndpointError {
    pub endpoint: String,
    #[source]
    pub source: url::ParseError,
}
