//! Auth demo controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller instance owns the view mode and talks to three seams: the
//! token store, the HTTP transport, and the presenter. The page creates it
//! once, runs [`AuthDemoController::page_load`], and routes form/button
//! events to the async operations below.
//!
//! CONCURRENCY
//! ===========
//! Operations take `&self`, so several may be in flight at once on the UI
//! thread. Each renders when its own response arrives; overlapping probes
//! overwrite the response display in completion order.
//!
//! ERROR HANDLING
//! ==============
//! Rejected logins and probe failures are rendered. Unexpected login
//! failures and undecodable tokens come back as [`DemoError`]; callers treat
//! them as the end of the interaction.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;

use crate::config::ClientConfig;
use crate::error::DemoError;
use crate::jwt::DecodedToken;
use crate::net::api::{self, Credentials, LoginOutcome, Probe};
use crate::net::transport::HttpTransport;
use crate::presenter::Presenter;
use crate::state::token::TokenStore;
use crate::state::view::ViewMode;

pub struct AuthDemoController<S, T, P> {
    config: ClientConfig,
    store: S,
    transport: T,
    presenter: P,
    view: Cell<ViewMode>,
}

impl<S, T, P> AuthDemoController<S, T, P>
where
    S: TokenStore,
    T: HttpTransport,
    P: Presenter,
{
    pub fn new(config: ClientConfig, store: S, transport: T, presenter: P) -> Self {
        Self { config, store, transport, presenter, view: Cell::new(ViewMode::Anonymous) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn view(&self) -> ViewMode {
        self.view.get()
    }

    /// Start every page anonymous: drop any token left by an earlier visit.
    pub fn page_load(&self) {
        if self.store.bearer().is_some() {
            log::info!("discarding token from a previous page load");
            self.store.clear();
        }
        self.view.set(ViewMode::Anonymous);
        self.presenter.show_anonymous_view();
    }

    /// Submit credentials to the auth service.
    ///
    /// A 401 opens the login error modal and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::UnexpectedLogin`] for any other failure and
    /// [`DemoError::MalformedToken`] when the issued token cannot be
    /// decoded. In the latter case the token has already been stored.
    pub async fn login(&self, credentials: Credentials) -> Result<(), DemoError> {
        let request = api::login_request(&self.config, &credentials)
            .map_err(|e| DemoError::UnexpectedLogin { reason: e.to_string() })?;
        log::debug!("POST {} as {:?}", request.url, credentials.username);

        match api::classify_login(self.transport.send(request).await) {
            LoginOutcome::Accepted(token) => {
                self.store.set(&token);
                self.show_logged_user_info()
            }
            LoginOutcome::Rejected(exception) => {
                log::warn!("login rejected: {exception}");
                self.presenter.show_login_error(&exception);
                Ok(())
            }
            LoginOutcome::Failed(reason) => Err(DemoError::UnexpectedLogin { reason }),
        }
    }

    /// Forget the token locally. The auth service is not told.
    pub fn logout(&self) {
        self.store.clear();
        self.view.set(ViewMode::Anonymous);
        self.presenter.show_anonymous_view();
        log::info!("logged out");
    }

    /// Call a protected endpoint and render whatever comes back.
    pub async fn probe(&self, probe: Probe) {
        let request = api::probe_request(&self.config, probe, &self.store);
        log::debug!("GET {} (authorized: {})", request.url, request.headers.contains_key("Authorization"));

        let (status, message) = api::probe_display(self.transport.send(request).await);
        self.presenter.show_response(status, &message);
    }

    fn show_logged_user_info(&self) -> Result<(), DemoError> {
        let raw = self.store.get().unwrap_or_default();
        let decoded = DecodedToken::decode(&raw)?;
        self.view.set(ViewMode::Authenticated);
        self.presenter.show_authenticated_view(&decoded);
        log::info!("{}", decoded.summary.headline().unwrap_or_else(|| "logged in".to_owned()));
        Ok(())
    }
}
