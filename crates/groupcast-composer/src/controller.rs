//! Submission lifecycle.
//!
//! `Idle -> Validating -> {Idle (rejected), Sending} -> Settling -> Idle`.
//! Staged files, text and selection are reset only when the server accepts
//! the submission; every other outcome leaves them for a retry.

use groupcast_core::{
    ComposerConfig, ErrorMetadata, LogLevel, MessageDraft, MessageTransport, Messages,
    SubmissionResponse, TransportError, ValidationError,
};
use tokio_util::sync::CancellationToken;

use crate::file_collection::FileCollection;
use crate::progress::ProgressSimulator;
use crate::selection::GroupSelection;
use crate::status::StatusReporter;

/// User-editable part of the composer.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub message: String,
    pub files: FileCollection,
    pub selection: GroupSelection,
}

impl FormState {
    pub fn new(selection: GroupSelection) -> Self {
        Self {
            message: String::new(),
            files: FileCollection::new(),
            selection,
        }
    }

    /// Clear text, staged files and every checkbox.
    pub fn reset(&mut self) {
        self.message.clear();
        self.files.clear();
        self.selection.clear();
    }
}

/// Submit control and busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub submit_enabled: bool,
    pub busy: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            submit_enabled: true,
            busy: false,
        }
    }
}

/// Result of one dispatched submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Accepted by the server; `failed_sends > 0` is a partial failure.
    Delivered {
        successful_sends: u32,
        failed_sends: u32,
        errors: Vec<String>,
    },
    /// Server answered `success: false`.
    Rejected { error: Option<String> },
    /// Request or response decoding failed.
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered { .. })
    }
}

pub struct SubmissionController<T> {
    transport: T,
    csrf_token: String,
    messages: &'static Messages,
    progress: ProgressSimulator,
    status: StatusReporter,
    controls: ControlState,
    /// Present while a request is outstanding; bounds the progress ticker.
    in_flight: Option<CancellationToken>,
}

impl<T: MessageTransport> SubmissionController<T> {
    pub fn new(transport: T, csrf_token: impl Into<String>, config: &ComposerConfig) -> Self {
        Self {
            transport,
            csrf_token: csrf_token.into(),
            messages: config.locale.messages(),
            progress: ProgressSimulator::new(config.progress.clone()),
            status: StatusReporter::new(config.status.clone()),
            controls: ControlState::default(),
            in_flight: None,
        }
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate the form and snapshot it into a draft.
    pub fn build_draft(&self, form: &FormState) -> Result<MessageDraft, ValidationError> {
        let group_ids = form.selection.checked_ids();
        if group_ids.is_empty() {
            return Err(ValidationError::NoGroupSelected);
        }

        let text = form.message.trim();
        if text.is_empty() && form.files.is_empty() {
            return Err(ValidationError::EmptyPayload);
        }

        Ok(MessageDraft {
            csrf_token: self.csrf_token.clone(),
            message_text: (!text.is_empty()).then(|| text.to_string()),
            group_ids,
            files: form.files.snapshot(),
        })
    }

    /// Validate, send once, and settle.
    ///
    /// Validation failures return `Err` without touching the network or the
    /// form. Once dispatched, the controls are re-enabled whatever the
    /// outcome, after the progress bar has been forced to 100%.
    pub async fn submit(
        &mut self,
        form: &mut FormState,
    ) -> Result<SubmissionOutcome, ValidationError> {
        let draft = match self.build_draft(form) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(code = err.error_code(), "Submission rejected by validation");
                self.status.error(self.messages.validation(err));
                return Err(err);
            }
        };

        let token = self.dispatch();
        tracing::info!(
            groups = draft.group_ids.len(),
            files = draft.files.len(),
            bytes = draft.total_bytes(),
            has_text = draft.message_text.is_some(),
            "Dispatching mass message"
        );

        let result = self.transport.send(&draft).await;

        token.cancel();
        self.progress.complete();
        let outcome = self.settle(result, form);

        self.controls = ControlState::default();
        self.in_flight = None;
        Ok(outcome)
    }

    fn dispatch(&mut self) -> CancellationToken {
        self.controls = ControlState {
            submit_enabled: false,
            busy: true,
        };
        self.status.hide();

        let token = CancellationToken::new();
        self.progress.start(token.child_token());
        self.in_flight = Some(token.clone());
        token
    }

    fn settle(
        &mut self,
        result: Result<SubmissionResponse, TransportError>,
        form: &mut FormState,
    ) -> SubmissionOutcome {
        match result {
            Ok(response) if response.success => {
                tracing::info!(
                    successful_sends = response.successful_sends,
                    failed_sends = response.failed_sends,
                    "Mass message delivered"
                );
                self.status.success(self.messages.delivered(
                    response.successful_sends,
                    response.failed_sends,
                    &response.errors,
                ));
                form.reset();
                SubmissionOutcome::Delivered {
                    successful_sends: response.successful_sends,
                    failed_sends: response.failed_sends,
                    errors: response.errors,
                }
            }
            Ok(response) => {
                tracing::warn!(error = ?response.error, "Mass message rejected by server");
                self.status
                    .error(self.messages.rejected(response.error.as_deref()));
                SubmissionOutcome::Rejected {
                    error: response.error,
                }
            }
            Err(err) => {
                log_transport_error(&err);
                let reason = err.to_string();
                self.status.error(self.messages.transport_failed(&reason));
                SubmissionOutcome::Failed { reason }
            }
        }
    }
}

fn log_transport_error(err: &TransportError) {
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(code = err.error_code(), error = %err, "Mass message request failed"),
        LogLevel::Warn => tracing::warn!(code = err.error_code(), error = %err, "Mass message request failed"),
        LogLevel::Error => tracing::error!(code = err.error_code(), error = %err, "Mass message request failed"),
    }
}
