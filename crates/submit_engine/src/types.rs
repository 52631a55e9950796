use std::fmt;

use thiserror::Error;

/// What the endpoint answered on success. The body is informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    pub status: u16,
    /// Parsed response body, or `{"success": true}` when absent or not JSON.
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SendError {
    pub kind: FailureKind,
    pub message: String,
}

impl SendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    Serialize,
    /// The transport itself panicked.
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Serialize => write!(f, "serialization error"),
            FailureKind::Internal => write!(f, "internal error"),
        }
    }
}
