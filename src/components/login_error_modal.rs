//! Modal shown when the auth service rejects a login.

use leptos::prelude::*;

use crate::presenter::SignalPresenter;

/// Hidden until the presenter carries an error. The body is the server's
/// message inserted as HTML.
#[component]
pub fn LoginErrorModal(presenter: SignalPresenter) -> impl IntoView {
    let on_close = move |_| presenter.dismiss_login_error();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            presenter.dismiss_login_error();
        }
    };

    view! {
        <div
            id="loginErrorModal"
            class="login-error-modal__backdrop"
            hidden=move || presenter.login_error.with(Option::is_none)
            on:click=on_close
        >
            <div class="login-error-modal" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <div class="login-error-modal__header">
                    <h2>"Login unsuccessful"</h2>
                    <button class="login-error-modal__close" on:click=on_close title="Close">
                        "✕"
                    </button>
                </div>
                <div
                    class="login-error-modal__body"
                    inner_html=move || presenter.login_error.get().unwrap_or_default()
                ></div>
            </div>
        </div>
    }
}
