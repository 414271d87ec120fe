//! Groupcast Core Library
//!
//! Domain models, error types, user-facing messages, configuration and the
//! transport seam shared by the composer, the API client and the CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod messages;
pub mod models;
pub mod transport;

// Re-export commonly used types
pub use config::{ComposerConfig, ProgressConfig, StatusTimings};
pub use error::{ErrorMetadata, LogLevel, TransportError, ValidationError};
pub use format::format_file_size;
pub use messages::{Locale, Messages};
pub use models::{
    FileDescriptor, GroupId, GroupOption, MediaCategory, MessageDraft, SubmissionResponse,
};
pub use transport::MessageTransport;
