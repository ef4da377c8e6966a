//! Client error taxonomy shared by the network layer and both controllers.
//!
//! ERROR HANDLING
//! ==============
//! No variant is fatal. Read failures degrade to an absent panel or a notice,
//! validation failures stop a request before dispatch, and an unconfirmed
//! delete leaves the board untouched.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by API calls and board transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, CORS, offline).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered 404.
    #[error("not found")]
    NotFound,

    /// The backend answered with a non-success status other than 404.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A required form field was empty after trimming.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// The user declined a destructive action.
    #[error("action not confirmed")]
    Unconfirmed,

    /// The action does not apply to the current board view.
    #[error("cannot {action} from the current view")]
    InvalidTransition { action: &'static str },
}

impl ClientError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::NotFound => "E_NOT_FOUND",
            Self::Status { .. } => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::Validation { .. } => "E_VALIDATION",
            Self::Unconfirmed => "E_UNCONFIRMED",
            Self::InvalidTransition { .. } => "E_INVALID_TRANSITION",
        }
    }

    /// Short text suitable for an inline notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "Post not found.".to_owned(),
            Self::Network(_) | Self::Status { .. } | Self::Decode(_) => {
                "Could not reach the server. Try again.".to_owned()
            }
            Self::Validation { field } => format!("Please enter a {field}."),
            Self::Unconfirmed | Self::InvalidTransition { .. } => String::new(),
        }
    }
}
