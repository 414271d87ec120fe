//! Error types module
//!
//! Two families of failure reach the user of the composer: local validation
//! errors, detected before any network I/O, and transport errors, raised while
//! talking to the mass-message endpoint. A server that answers with
//! `success: false` is not an error at this level; it is a decoded response.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be reported.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "NO_GROUP_SELECTED")
    fn error_code(&self) -> &'static str;

    /// Whether resubmitting without changes can succeed
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Rejections raised by local validation before a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No group selected")]
    NoGroupSelected,

    #[error("Message text and attachments are both empty")]
    EmptyPayload,
}

impl ErrorMetadata for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NoGroupSelected => "NO_GROUP_SELECTED",
            ValidationError::EmptyPayload => "EMPTY_PAYLOAD",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

/// Failures while delivering a draft or reading the endpoint's answer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    InvalidRequest(String),

    #[error("Failed to send request: {0}")]
    Request(String),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response as JSON: {0}")]
    Decode(String),
}

impl ErrorMetadata for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::InvalidRequest(_) => "INVALID_REQUEST",
            TransportError::Request(_) => "REQUEST_FAILED",
            TransportError::Status { .. } => "HTTP_STATUS",
            TransportError::Decode(_) => "DECODE_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            TransportError::InvalidRequest(_) | TransportError::Decode(_) => false,
            TransportError::Request(_) => true,
            TransportError::Status { status, .. } => *status >= 500,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            TransportError::InvalidRequest(_) => LogLevel::Error,
            TransportError::Request(_) | TransportError::Status { .. } => LogLevel::Warn,
            TransportError::Decode(_) => LogLevel::Error,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_metadata() {
        let err = ValidationError::NoGroupSelected;
        assert_eq!(err.error_code(), "NO_GROUP_SELECTED");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);

        assert_eq!(ValidationError::EmptyPayload.error_code(), "EMPTY_PAYLOAD");
    }

    #[test]
    fn test_transport_status_recoverability() {
        let server = TransportError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert!(server.is_recoverable());
        assert_eq!(server.error_code(), "HTTP_STATUS");

        let client = TransportError::Status {
            status: 403,
            body: "CSRF verification failed".to_string(),
        };
        assert!(!client.is_recoverable());
        assert!(client.to_string().contains("403"));
        assert!(client.to_string().contains("CSRF verification failed"));
    }

    #[test]
    fn test_transport_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = TransportError::from(json_err);
        assert_eq!(err.error_code(), "DECODE_FAILED");
        assert_eq!(err.log_level(), LogLevel::Error);
        assert!(err.to_string().starts_with("Failed to parse response as JSON"));
    }
}
