//! Test doubles for the controller's seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use futures::channel::oneshot;

use crate::error::TransportError;
use crate::jwt::DecodedToken;
use crate::net::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::presenter::Presenter;
use crate::state::view::{login_error_markup, response_text};

/// HS512-style header, the given payload, and a dummy signature.
pub fn make_token(payload: &serde_json::Value) -> String {
    let segment = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzUxMiJ9.{segment}.c2lnbmF0dXJl")
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    let status_text = match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "",
    };
    HttpResponse { status, status_text: status_text.to_owned(), body: body.to_owned() }
}

type Reply = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Transport answering from per-URL queues.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<String, VecDeque<Scripted>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(&self, url: &str, resp: HttpResponse) {
        self.push(url, Scripted::Ready(Ok(resp)));
    }

    pub fn fail(&self, url: &str, reason: &str) {
        self.push(url, Scripted::Ready(Err(TransportError::new(reason))));
    }

    /// Queue a reply that resolves when the returned sender fires.
    pub fn defer(&self, url: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(url, Scripted::Deferred(rx));
        tx
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    fn push(&self, url: &str, scripted: Scripted) {
        self.replies.borrow_mut().entry(url.to_owned()).or_default().push_back(scripted);
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        let next = self.replies.borrow_mut().get_mut(&request.url).and_then(VecDeque::pop_front);
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx.await.unwrap_or_else(|_| Err(TransportError::new("abandoned"))),
            None => Err(TransportError::new(format!("no reply scripted for {}", request.url))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shown {
    Authenticated { title: String, payload: String },
    Anonymous,
    Response(String),
    LoginError(String),
}

/// Presenter that records every call in order.
#[derive(Default)]
pub struct RecordingPresenter {
    shown: RefCell<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }

    pub fn last_response(&self) -> Option<String> {
        self.shown.borrow().iter().rev().find_map(|s| match s {
            Shown::Response(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn login_error(&self) -> Option<String> {
        self.shown.borrow().iter().rev().find_map(|s| match s {
            Shown::LoginError(markup) => Some(markup.clone()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn show_authenticated_view(&self, token: &DecodedToken) {
        self.shown
            .borrow_mut()
            .push(Shown::Authenticated { title: token.title(), payload: token.payload_pretty.clone() });
    }

    fn show_anonymous_view(&self) {
        self.shown.borrow_mut().push(Shown::Anonymous);
    }

    fn show_response(&self, status: u16, message: &str) {
        self.shown.borrow_mut().push(Shown::Response(response_text(status, message)));
    }

    fn show_login_error(&self, exception: &str) {
        self.shown.borrow_mut().push(Shown::LoginError(login_error_markup(exception)));
    }
}
