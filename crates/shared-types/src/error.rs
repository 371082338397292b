use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert text shown to the visitor when a submission fails.
pub const SUBMIT_FAILED_ALERT: &str = "Error submitting form. Please try again later.";

/// Categorization of submission errors.
///
/// The form endpoint answers with an opaque response, so the only failure
/// that can be observed is the request itself not going through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitErrorKind {
    Network,
}

impl fmt::Display for SubmitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitErrorKind::Network => write!(f, "Network"),
        }
    }
}

/// Error raised when a lead could not be delivered to the form endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: SubmitErrorKind,
    pub message: String,
}

impl SubmitError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Network,
            message: message.into(),
        }
    }

    /// The blocking alert text for this error. Transport details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED_ALERT
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SubmitError {}
