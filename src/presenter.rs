//! Presentation port between the controller and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches the DOM. It reports what should be visible
//! through [`Presenter`]; the page implements it with signals that the
//! components in `components/` read.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

use leptos::prelude::*;

use crate::jwt::DecodedToken;
use crate::state::view::{ViewMode, login_error_markup, response_text};

pub trait Presenter {
    /// Hide the anonymous group and show the token title and payload.
    fn show_authenticated_view(&self, token: &DecodedToken);
    /// Hide the authenticated group and show the login form.
    fn show_anonymous_view(&self);
    /// Replace the response display.
    fn show_response(&self, status: u16, message: &str);
    /// Open the login error modal with the server's message.
    fn show_login_error(&self, exception: &str);
}

/// Signal-backed presenter used by the page.
#[derive(Clone, Copy)]
pub struct SignalPresenter {
    pub view: RwSignal<ViewMode>,
    pub token: RwSignal<Option<DecodedToken>>,
    pub response: RwSignal<String>,
    /// Raw HTML for the modal body; `None` while the modal is closed.
    pub login_error: RwSignal<Option<String>>,
}

impl SignalPresenter {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewMode::Anonymous),
            token: RwSignal::new(None),
            response: RwSignal::new(String::new()),
            login_error: RwSignal::new(None),
        }
    }

    pub fn dismiss_login_error(&self) {
        self.login_error.set(None);
    }
}

impl Default for SignalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for SignalPresenter {
    fn show_authenticated_view(&self, token: &DecodedToken) {
        self.token.set(Some(token.clone()));
        self.view.set(ViewMode::Authenticated);
    }

    fn show_anonymous_view(&self) {
        self.view.set(ViewMode::Anonymous);
    }

    fn show_response(&self, status: u16, message: &str) {
        self.response.set(response_text(status, message));
    }

    fn show_login_error(&self, exception: &str) {
        self.login_error.set(Some(login_error_markup(exception)));
    }
}
