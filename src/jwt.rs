//! Display-only JWT payload decoding.
//!
//! The token is never verified here. Only the payload segment is read, so
//! that the authenticated view can show what the auth service put into it.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::Value;

use crate::error::TokenDecodeError;

/// Decode the payload segment of `token` into JSON.
///
/// # Errors
///
/// Returns an error if the token has no second `.`-separated segment, the
/// segment is not base64url (padded or unpadded), or the bytes are not JSON.
pub fn decode_payload(token: &str) -> Result<Value, TokenDecodeError> {
    let segment = token.split('.').nth(1).ok_or(TokenDecodeError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// A token decoded for the authenticated view.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedToken {
    pub raw: String,
    pub payload: Value,
    /// `payload` pretty-printed with two-space indentation.
    pub payload_pretty: String,
    pub summary: TokenSummary,
}

impl DecodedToken {
    /// # Errors
    ///
    /// Fails exactly when [`decode_payload`] fails.
    pub fn decode(raw: &str) -> Result<Self, TokenDecodeError> {
        let payload = decode_payload(raw)?;
        let payload_pretty = serde_json::to_string_pretty(&payload)?;
        let summary = TokenSummary::from_payload(&payload);
        Ok(Self { raw: raw.to_owned(), payload, payload_pretty, summary })
    }

    /// Heading shown above the payload.
    pub fn title(&self) -> String {
        format!("Token: {}", self.raw)
    }
}

/// Well-known claims issued by the auth service, when present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSummary {
    /// `sub`: the username the token was issued to.
    pub subject: Option<String>,
    /// `created`: issue time in epoch milliseconds.
    pub created_ms: Option<i64>,
    /// `exp`: expiry in epoch seconds.
    pub expires_at: Option<i64>,
}

impl TokenSummary {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            subject: payload.get("sub").and_then(Value::as_str).map(str::to_owned),
            created_ms: payload.get("created").and_then(Value::as_i64),
            expires_at: payload.get("exp").and_then(Value::as_i64),
        }
    }

    /// One-line description, or `None` when the token names no subject.
    pub fn headline(&self) -> Option<String> {
        let subject = self.subject.as_deref()?;
        let mut line = format!("Signed in as {subject}");
        if let Some(created_ms) = self.created_ms {
            line.push_str(&format!(", issued at {}", created_ms / 1000));
        }
        if let Some(expires_at) = self.expires_at {
            line.push_str(&format!(", expires at {expires_at}"));
        }
        Some(line)
    }
}
