//! Requests against the auth service and how their responses are read.
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified into plain values here; the controller decides
//! which outcomes are rendered and which end the interaction.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use super::transport::{Headers, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::state::token::TokenStore;

pub const LOGIN_PATH: &str = "/auth";
pub const AUTHENTICATED_PATH: &str = "/authenticated";
pub const ADMIN_PATH: &str = "/admin";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Login form values, forwarded without validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    #[serde(default)]
    exception: Option<String>,
}

/// The two protected endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Authenticated,
    Admin,
}

impl Probe {
    pub fn path(self) -> &'static str {
        match self {
            Self::Authenticated => AUTHENTICATED_PATH,
            Self::Admin => ADMIN_PATH,
        }
    }
}

/// `{"Authorization": token}` when a non-empty token is stored, else empty.
pub fn authorization_header(store: &impl TokenStore) -> Headers {
    let mut headers = Headers::new();
    if let Some(token) = store.bearer() {
        headers.insert("Authorization".to_owned(), token);
    }
    headers
}

/// Build the `POST /auth` request.
///
/// # Errors
///
/// Returns an error if the credentials cannot be serialized.
pub fn login_request(config: &ClientConfig, credentials: &Credentials) -> Result<HttpRequest, serde_json::Error> {
    let body = serde_json::to_string(credentials)?;
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned());
    headers.insert("Accept".to_owned(), "application/json".to_owned());
    Ok(HttpRequest { method: HttpMethod::Post, url: config.url(LOGIN_PATH), headers, body: Some(body) })
}

/// Build a probe `GET`, decorated with the current authorization header.
pub fn probe_request(config: &ClientConfig, probe: Probe, store: &impl TokenStore) -> HttpRequest {
    let mut headers = authorization_header(store);
    headers.insert("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned());
    HttpRequest { method: HttpMethod::Get, url: config.url(probe.path()), headers, body: None }
}

/// How a login attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx with a token.
    Accepted(String),
    /// 401 with the server's exception message (empty when absent).
    Rejected(String),
    /// Anything else, with the reason to report.
    Failed(String),
}

pub fn classify_login(result: Result<HttpResponse, TransportError>) -> LoginOutcome {
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => return LoginOutcome::Failed(e.reason),
    };
    if resp.is_success() {
        return match serde_json::from_str::<LoginResponse>(&resp.body) {
            Ok(body) => LoginOutcome::Accepted(body.token),
            Err(e) => LoginOutcome::Failed(format!("unreadable login response: {e}")),
        };
    }
    if resp.status == 401 {
        return match serde_json::from_str::<LoginErrorBody>(&resp.body) {
            Ok(body) => LoginOutcome::Rejected(body.exception.unwrap_or_default()),
            Err(e) => LoginOutcome::Failed(format!("unreadable rejection: {e}")),
        };
    }
    LoginOutcome::Failed(reason_phrase(&resp))
}

/// Status and message for the response display.
///
/// Non-2xx responses show their body, or the reason phrase when the body is
/// empty. Network faults show status `0` and the transport's reason.
pub fn probe_display(result: Result<HttpResponse, TransportError>) -> (u16, String) {
    match result {
        Ok(resp) if resp.is_success() || !resp.body.is_empty() => (resp.status, resp.body),
        Ok(resp) => {
            let message = reason_phrase(&resp);
            (resp.status, message)
        }
        Err(e) => (0, e.reason),
    }
}

fn reason_phrase(resp: &HttpResponse) -> String {
    if resp.status_text.is_empty() { format!("HTTP {}", resp.status) } else { resp.status_text.clone() }
}
