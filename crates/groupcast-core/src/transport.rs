//! Network seam between the submission controller and the HTTP client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{MessageDraft, SubmissionResponse};

/// Delivers one draft to the mass-message endpoint. Exactly one request per
/// call; implementations must not retry.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, draft: &MessageDraft) -> Result<SubmissionResponse, TransportError>;
}

#[async_trait]
impl<T: MessageTransport + ?Sized> MessageTransport for Arc<T> {
    async fn send(&self, draft: &MessageDraft) -> Result<SubmissionResponse, TransportError> {
        (**self).send(draft).await
    }
}
