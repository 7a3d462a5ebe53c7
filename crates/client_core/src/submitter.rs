//! Optimistic rating submission: local state first, network second.

use std::sync::Arc;

use shared::{
    domain::{ArticleId, Rating},
    protocol::RatingSubmission,
};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error};

use crate::{error::RatingSubmitError, ratings::RatingStore, transport::RatingTransport};

#[derive(Clone)]
pub struct RatingSubmitter {
    transport: Arc<dyn RatingTransport>,
    runtime: Handle,
}

impl RatingSubmitter {
    pub fn new(transport: Arc<dyn RatingTransport>, runtime: Handle) -> Self {
        Self { transport, runtime }
    }

    /// Must be called from inside a tokio runtime.
    pub fn on_current_runtime(transport: Arc<dyn RatingTransport>) -> Self {
        Self::new(transport, Handle::current())
    }

    /// Records `rating` in `store`, then sends it in the background. The local write is
    /// never rolled back; the returned handle only reports what happened on the wire.
    pub fn submit(
        &self,
        store: &mut RatingStore,
        article_id: ArticleId,
        rating: Rating,
    ) -> PendingSubmission {
        store.record(article_id, rating);
        self.send(RatingSubmission { article_id, rating })
    }

    /// Every call spawns its own request; overlapping submissions for one article are not
    /// deduplicated or ordered.
    pub fn send(&self, submission: RatingSubmission) -> PendingSubmission {
        let transport = Arc::clone(&self.transport);
        let handle = self.runtime.spawn(async move {
            let result = transport.post_rating(&submission).await;
            match &result {
                Ok(()) => debug!(
                    article_id = %submission.article_id,
                    rating = %submission.rating,
                    "rating saved"
                ),
                Err(err) => error!(
                    article_id = %submission.article_id,
                    rating = %submission.rating,
                    error = %err,
                    "failed to save rating"
                ),
            }
            result
        });

        PendingSubmission {
            submission,
            handle,
        }
    }
}

/// In-flight rating request. Dropping it detaches the request; it still runs and still
/// logs its outcome.
#[derive(Debug)]
pub struct PendingSubmission {
    submission: RatingSubmission,
    handle: JoinHandle<Result<(), RatingSubmitError>>,
}

impl PendingSubmission {
    pub fn submission(&self) -> RatingSubmission {
        self.submission
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn outcome(self) -> Result<(), RatingSubmitError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) => Err(RatingSubmitError::Aborted(join_err.to_string())),
        }
    }

    pub fn detach(self) {}
}
