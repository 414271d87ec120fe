//! Mass-message request assembly and the [`MessageTransport`] implementation.

use async_trait::async_trait;
use groupcast_core::{MessageDraft, MessageTransport, SubmissionResponse, TransportError};
use reqwest::multipart::{Form, Part};

use crate::ApiClient;

pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const MESSAGE_FIELD: &str = "message_text";
pub const GROUP_FIELD: &str = "group_ids";
pub const FILE_FIELD: &str = "files";

/// Build the multipart body for one draft.
///
/// Field order: anti-forgery token, message text (only when present), one
/// `group_ids` entry per group, one `files` part per file in staging order.
pub fn build_form(draft: &MessageDraft) -> Result<Form, TransportError> {
    let mut form = Form::new().text(CSRF_FIELD, draft.csrf_token.clone());

    if let Some(text) = draft.message_text.as_ref().filter(|t| !t.is_empty()) {
        form = form.text(MESSAGE_FIELD, text.clone());
    }

    for group_id in &draft.group_ids {
        form = form.text(GROUP_FIELD, group_id.to_string());
    }

    for file in &draft.files {
        let part = Part::stream_with_length(file.content().clone(), file.size())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(|e| {
                TransportError::InvalidRequest(format!(
                    "invalid content type {:?} for {}: {}",
                    file.mime_type(),
                    file.name(),
                    e
                ))
            })?;
        form = form.part(FILE_FIELD, part);
    }

    Ok(form)
}

impl ApiClient {
    /// Submit one mass message. Issues exactly one POST; no retries.
    pub async fn send_mass_message(
        &self,
        draft: &MessageDraft,
    ) -> Result<SubmissionResponse, TransportError> {
        let form = build_form(draft)?;

        tracing::debug!(
            url = %self.build_url(self.endpoint()),
            groups = draft.group_ids.len(),
            files = draft.files.len(),
            bytes = draft.total_bytes(),
            "Posting mass message"
        );

        self.post_multipart(self.endpoint(), form).await
    }
}

#[async_trait]
impl MessageTransport for ApiClient {
    async fn send(&self, draft: &MessageDraft) -> Result<SubmissionResponse, TransportError> {
        self.send_mass_message(draft).await
    }
}
