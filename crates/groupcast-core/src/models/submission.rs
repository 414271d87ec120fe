use serde::{Deserialize, Serialize};

use super::file::FileDescriptor;
use super::group::GroupId;

/// Snapshot of one submission attempt, assembled after validation passes.
///
/// Files are cheap clones of the staged descriptors, so the composer may keep
/// mutating its own state while the request is in flight.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub csrf_token: String,
    /// Trimmed text; `None` when empty.
    pub message_text: Option<String>,
    pub group_ids: Vec<GroupId>,
    pub files: Vec<FileDescriptor>,
}

impl MessageDraft {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(FileDescriptor::size).sum()
    }
}

/// JSON body returned by the mass-message endpoint.
///
/// `successful_sends`, `failed_sends` and `errors` are meaningful only when
/// `success` is true; `error` only when it is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default)]
    pub successful_sends: u32,
    #[serde(default)]
    pub failed_sends: u32,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResponse {
    pub fn delivered(successful_sends: u32, failed_sends: u32, errors: Vec<String>) -> Self {
        Self {
            success: true,
            successful_sends,
            failed_sends,
            errors,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
