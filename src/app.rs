//! Root page: login form, token view, probe buttons, response display.
//!
//! The anonymous and authenticated groups are both rendered and toggled with
//! `hidden`, so exactly one is visible for any [`ViewMode`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{login_error_modal::LoginErrorModal, response_panel::ResponsePanel, token_panel::TokenPanel};
use crate::config::ClientConfig;
use crate::controller::AuthDemoController;
use crate::error::DemoError;
use crate::jwt::DecodedToken;
use crate::net::api::{Credentials, Probe};
use crate::net::transport::BrowserTransport;
use crate::presenter::SignalPresenter;
use crate::state::token::LocalStorageTokenStore;
use crate::state::view::ViewMode;

pub type BrowserController = AuthDemoController<LocalStorageTokenStore, BrowserTransport, SignalPresenter>;

/// Run one interaction on the UI thread. An error ends the interaction and
/// is reported to the console only.
fn run_interaction<F>(interaction: F)
where
    F: Future<Output = Result<(), DemoError>> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = interaction.await {
            log::error!("{e}");
        }
    });
    #[cfg(not(feature = "csr"))]
    drop(interaction);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let presenter = SignalPresenter::new();
    let store = LocalStorageTokenStore::new(config.token_key.clone());
    let controller: Rc<BrowserController> =
        Rc::new(AuthDemoController::new(config, store, BrowserTransport, presenter));
    controller.page_load();
    let controller = StoredValue::new_local(controller);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        let controller = controller.get_value();
        run_interaction(async move { controller.login(credentials).await });
    };
    let on_logout = move |_| controller.with_value(|c| c.logout());
    let probe = move |probe: Probe| {
        let controller = controller.get_value();
        run_interaction(async move {
            controller.probe(probe).await;
            Ok(())
        });
    };

    let anonymous = move || presenter.view.get() == ViewMode::Anonymous;
    let token_title = move || presenter.token.with(|t| t.as_ref().map(DecodedToken::title).unwrap_or_default());

    view! {
        <Title text="JWT Authentication Demo"/>

        <div class="demo-page">
            <header class="demo-page__header">
                <h1 id="anonymousTitle" hidden=move || !anonymous()>"Not logged in"</h1>
                <h1 id="authenticatedTitle" class="demo-page__token" hidden=anonymous>{token_title}</h1>
            </header>

            <section id="anonymousBody" class="demo-page__body" hidden=move || !anonymous()>
                <form id="loginForm" class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Login"</button>
                </form>
            </section>

            <section id="authenticatedBody" class="demo-page__body" hidden=anonymous>
                <TokenPanel presenter/>
                <button id="logoutButton" class="logout-button" on:click=on_logout>"Logout"</button>
            </section>

            <section class="demo-page__probes">
                <button id="authServiceBtn" on:click=move |_| probe(Probe::Authenticated)>
                    "Call authenticated service"
                </button>
                <button id="adminServiceBtn" on:click=move |_| probe(Probe::Admin)>
                    "Call admin service"
                </button>
                <ResponsePanel presenter/>
            </section>

            <LoginErrorModal presenter/>
        </div>
    }
}
