//! Outbound side of rating submission.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::RatingSubmission;
use url::Url;

use crate::error::{EndpointError, RatingSubmitError};

pub const DEFAULT_RATINGS_ENDPOINT: &str =
    "https://functions.poehali.dev/ffba078a-3171-48bb-9da9-93136f62c0b8";

#[async_trait]
pub trait RatingTransport: Send + Sync {
    async fn post_rating(&self, submission: &RatingSubmission) -> Result<(), RatingSubmitError>;
}

/// POSTs the submission as JSON. Any 2xx counts as success and the body is not read.
#[derive(Debug, Clone)]
pub struct HttpRatingTransport {
    http: Client,
    endpoint: Url,
}

impl HttpRatingTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn parse(endpoint: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(endpoint).map_err(|source| EndpointError {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self::new(url))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RatingTransport for HttpRatingTransport {
    async fn post_rating(&self, submission: &RatingSubmission) -> Result<(), RatingSubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(RatingSubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatingSubmitError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
