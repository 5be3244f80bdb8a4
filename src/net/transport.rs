//! HTTP transport seam.
//!
//! Browser (csr): real requests via `gloo-net`.
//! Elsewhere: every request fails with a transport error, since the page's
//! endpoints are only reachable from the browser. Tests script their own
//! transport.

#![allow(clippy::unused_async)]

use std::collections::BTreeMap;

use crate::error::TransportError;

pub type Headers = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. `"Forbidden"`.
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and resolves when its response arrives.
///
/// Futures are not `Send`: all work stays on the browser's UI thread.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP response was received.
    /// Non-2xx responses are `Ok`.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| TransportError::new(e.to_string()))?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(HttpResponse { status, status_text, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::new(format!("{} is only reachable from the browser", request.url)))
        }
    }
}
