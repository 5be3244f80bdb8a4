//! Error types for the demo flow.
//!
//! ERROR HANDLING
//! ==============
//! Only two faults escape the controller: a login that failed in a way the
//! page has no message for, and a token that cannot be decoded for display.
//! Browser glue logs both and abandons the interaction. Probe failures and
//! rejected logins are rendered, never returned.

use thiserror::Error;

/// Faults that end the current interaction.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Login failed with a status other than 401, a network fault, or an
    /// unreadable response body.
    #[error("an unexpected error occurred: {reason}")]
    UnexpectedLogin { reason: String },

    /// The stored token is not a displayable JWT.
    #[error("malformed token: {0}")]
    MalformedToken(#[from] TokenDecodeError),
}

/// Why a token payload could not be decoded for display.
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("missing payload segment")]
    MissingPayload,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A request that never produced an HTTP response.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
